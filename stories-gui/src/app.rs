use std::sync::Arc;

use eframe::egui::{self, Color32, Rounding, Stroke};
use stories_core::{filter_stories, PersistedValue, Story, ThemeConfig};
use tokio::runtime::Runtime;

use crate::widgets::{input_with_label, story_list, InputType};

pub struct AppInit {
    pub runtime: Arc<Runtime>,
    pub theme: ThemeConfig,
    pub font_size: f32,
    pub stories: Vec<Story>,
    pub search: PersistedValue,
}

pub struct StoriesApp {
    runtime: Arc<Runtime>,
    theme: ThemeConfig,
    font_size: f32,
    stories: Vec<Story>,
    search: PersistedValue,
}

impl StoriesApp {
    pub fn new(init: AppInit) -> Self {
        Self {
            runtime: init.runtime,
            theme: init.theme,
            font_size: init.font_size,
            stories: init.stories,
            search: init.search,
        }
    }

    fn setup_dark_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let bg_color = self.theme.background_color32();
        let panel_color = self.theme.panel_color32();
        let border_color = self.theme.border_color32();
        let text_color = self.theme.text_color32();
        let accent_color = self.theme.accent_color32();

        style.visuals.dark_mode = true;
        style.visuals.panel_fill = panel_color;
        style.visuals.window_fill = bg_color;
        style.visuals.extreme_bg_color = Color32::from_rgb(25, 25, 25);
        style.visuals.override_text_color = Some(text_color);
        style.visuals.hyperlink_color = accent_color;

        style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, border_color);
        style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, border_color);
        style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent_color);
        style.visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color);
        style.visuals.selection.stroke = Stroke::new(1.0, accent_color);

        style.visuals.widgets.inactive.rounding = Rounding::same(3.0);
        style.visuals.widgets.hovered.rounding = Rounding::same(3.0);
        style.visuals.widgets.active.rounding = Rounding::same(3.0);

        for font_id in style.text_styles.values_mut() {
            if font_id.size < self.font_size {
                font_id.size = self.font_size;
            }
        }
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);

        ctx.set_style(style);
    }

    fn draw_main_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(egui::RichText::new("My Hacker Stories").size(self.font_size + 8.0));
            ui.add_space(6.0);

            let mut typed = None;
            input_with_label(
                ui,
                "search",
                "Search",
                self.search.value(),
                InputType::default(),
                |value| typed = Some(value),
            );
            if let Some(value) = typed {
                self.search.set_value(value);
            }

            ui.separator();

            let visible = filter_stories(&self.stories, self.search.value());
            story_list(ui, &visible, self.theme.secondary_text_color32());
        });
    }
}

impl eframe::App for StoriesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.setup_dark_theme(ctx);
        self.draw_main_content(ctx);

        // Persister la recherche une fois la frame rendue (no-op si inchangée)
        self.runtime.block_on(self.search.settle());
    }
}
