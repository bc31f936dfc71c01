use eframe::egui::{self, Color32, RichText};
use stories_core::Story;
use tracing::warn;

const EMPTY_LIST_TEXT: &str = "No matching stories";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Password,
}

/// Label plus single-line field sharing `id`. Holds no state: `value` is
/// copied in every frame and edits are reported through `on_input_change`.
pub fn input_with_label(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &str,
    input_type: InputType,
    mut on_input_change: impl FnMut(String),
) -> egui::Response {
    ui.horizontal(|ui| {
        let label_response = ui.add(egui::Label::new(label).sense(egui::Sense::click()));

        let mut buffer = value.to_owned();
        let response = ui
            .add(
                egui::TextEdit::singleline(&mut buffer)
                    .id(egui::Id::new(id))
                    .password(input_type == InputType::Password),
            )
            .labelled_by(label_response.id);

        // Cliquer sur le libellé donne le focus au champ
        if label_response.clicked() {
            response.request_focus();
        }
        if response.changed() {
            on_input_change(buffer);
        }
        response
    })
    .inner
}

/// Author, comment count and points, in display order.
pub fn story_meta(story: &Story) -> [String; 3] {
    [
        story.author.clone(),
        format!("{} comments", story.num_comments),
        format!("{} points", story.points),
    ]
}

/// Renders one row per story and returns the row scope ids, in order. Rows
/// are scoped by `object_id`, so a story keeps its id wherever it appears.
pub fn story_list(ui: &mut egui::Ui, stories: &[&Story], meta_color: Color32) -> Vec<egui::Id> {
    if stories.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(RichText::new(EMPTY_LIST_TEXT).weak().size(14.0));
        });
        return Vec::new();
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            stories
                .iter()
                .map(|story| {
                    ui.push_id(story.object_id, |ui| story_item(ui, story, meta_color))
                        .inner
                })
                .collect()
        })
        .inner
}

fn story_item(ui: &mut egui::Ui, story: &Story, meta_color: Color32) -> egui::Id {
    ui.horizontal_wrapped(|ui| {
        let link = ui
            .add(egui::Link::new(RichText::new(&story.title).strong().size(15.0)))
            .on_hover_text(&story.url);
        if link.clicked() {
            if let Err(e) = webbrowser::open(&story.url) {
                warn!(url = %story.url, error = %e, "failed to open story link");
            }
        }

        for part in story_meta(story) {
            ui.separator();
            ui.label(RichText::new(part).color(meta_color).size(13.0));
        }
    });
    ui.id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stories_core::sample_stories;

    fn run_frame(
        ctx: &egui::Context,
        events: Vec<egui::Event>,
        mut add_contents: impl FnMut(&mut egui::Ui),
    ) -> egui::FullOutput {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        })
    }

    fn painted_text(output: &egui::FullOutput) -> Vec<String> {
        output
            .shapes
            .iter()
            .filter_map(|clipped| match &clipped.shape {
                egui::epaint::Shape::Text(text) => Some(text.galley.text().to_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn input_defaults_to_text() {
        assert_eq!(InputType::default(), InputType::Text);
    }

    #[test]
    fn meta_lists_author_comments_and_points() {
        let stories = sample_stories();
        assert_eq!(
            story_meta(&stories[0]),
            [
                "Jordan Walke".to_string(),
                "3 comments".to_string(),
                "4 points".to_string()
            ]
        );
    }

    #[test]
    fn untouched_input_reports_nothing() {
        let ctx = egui::Context::default();
        let mut calls = Vec::new();
        run_frame(&ctx, Vec::new(), |ui| {
            let response =
                input_with_label(ui, "search", "Search", "React", InputType::Text, |v| {
                    calls.push(v)
                });
            assert_eq!(response.id, egui::Id::new("search"));
        });
        assert!(calls.is_empty());
    }

    #[test]
    fn typed_text_reaches_callback() {
        let ctx = egui::Context::default();
        let mut calls: Vec<String> = Vec::new();
        let frame = |events: Vec<egui::Event>, calls: &mut Vec<String>| {
            run_frame(&ctx, events, |ui| {
                input_with_label(ui, "search", "Search", "re", InputType::Text, |v| {
                    calls.push(v)
                });
            });
        };

        frame(Vec::new(), &mut calls);
        ctx.memory_mut(|m| m.request_focus(egui::Id::new("search")));
        frame(Vec::new(), &mut calls);
        assert!(calls.is_empty());

        frame(vec![egui::Event::Text("d".into())], &mut calls);
        assert_eq!(calls, vec!["red".to_string()]);
    }

    #[test]
    fn list_has_one_row_per_story_keyed_by_object_id() {
        let ctx = egui::Context::default();
        let stories = sample_stories();
        let all: Vec<&Story> = stories.iter().collect();

        let mut full = Vec::new();
        let output = run_frame(&ctx, Vec::new(), |ui| {
            full = story_list(ui, &all, Color32::GRAY)
        });
        assert_eq!(full.len(), 2);
        assert_ne!(full[0], full[1]);
        let text = painted_text(&output);
        assert!(text.iter().any(|t| t == "React"));
        assert!(text.iter().any(|t| t == "Dan Abramov, Andrew Clark"));

        // Redux keeps its row id when it is the only match
        let mut filtered = Vec::new();
        run_frame(&ctx, Vec::new(), |ui| {
            filtered = story_list(ui, &[&stories[1]], Color32::GRAY)
        });
        assert_eq!(filtered, vec![full[1]]);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let ctx = egui::Context::default();
        let mut rows = vec![egui::Id::NULL];
        let output = run_frame(&ctx, Vec::new(), |ui| rows = story_list(ui, &[], Color32::GRAY));
        assert!(rows.is_empty());
        assert!(painted_text(&output).iter().any(|t| t == EMPTY_LIST_TEXT));
    }
}
