/// Remembers the dependency values a side effect last ran with, so it only
/// reruns when one of them changed.
#[derive(Debug, Clone, Default)]
pub struct Effect<D> {
    last: Option<D>,
}

impl<D: PartialEq + Clone> Effect<D> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Records `deps` and returns true on the first call or when `deps`
    /// differs from the previous snapshot.
    pub fn should_run(&mut self, deps: &D) -> bool {
        if self.last.as_ref() == Some(deps) {
            return false;
        }
        self.last = Some(deps.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_always_runs() {
        let mut effect = Effect::new();
        assert!(effect.should_run(&("search".to_string(), "React".to_string())));
    }

    #[test]
    fn unchanged_deps_are_skipped() {
        let mut effect = Effect::new();
        let deps = ("search".to_string(), "re".to_string());
        assert!(effect.should_run(&deps));
        assert!(!effect.should_run(&deps));
        assert!(!effect.should_run(&deps.clone()));
    }

    #[test]
    fn any_changed_dependency_reruns() {
        let mut effect = Effect::new();
        assert!(effect.should_run(&("search", "re")));
        assert!(effect.should_run(&("search", "red")));
        assert!(effect.should_run(&("other", "red")));
        assert!(!effect.should_run(&("other", "red")));
    }

    #[test]
    fn returning_to_earlier_deps_reruns() {
        let mut effect = Effect::new();
        assert!(effect.should_run(&1));
        assert!(effect.should_run(&2));
        assert!(effect.should_run(&1));
    }
}
