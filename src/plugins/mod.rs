pub mod hooks;

pub use hooks::{HookContext, HookStage};

use log::{debug, error};

type HookFn = Box<dyn Fn(&mut HookContext) -> Result<(), String> + Send + Sync>;

struct HookEntry {
    stage: HookStage,
    name: String,
    handler: HookFn,
}

/// Ordered list of build hooks, passed by reference into the pipeline.
///
/// There is no global registry; whoever drives a build constructs one and
/// hands it down. Handlers run in registration order, and a failing handler
/// is logged and skipped without affecting the others, the same isolation
/// applied to a file that fails to parse.
#[derive(Default)]
pub struct HookRegistry {
    entries: Vec<HookEntry>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named handler for a stage
    pub fn register<F>(&mut self, stage: HookStage, name: &str, handler: F)
    where
        F: Fn(&mut HookContext) -> Result<(), String> + Send + Sync + 'static,
    {
        self.entries.push(HookEntry {
            stage,
            name: name.to_string(),
            handler: Box::new(handler),
        });
    }

    /// Run every handler registered for a stage, in order
    pub fn run(&self, stage: HookStage, ctx: &mut HookContext) {
        for entry in self.entries.iter().filter(|e| e.stage == stage) {
            debug!("Running {} hook \"{}\"", stage.name(), entry.name);

            if let Err(e) = (entry.handler)(ctx) {
                error!("Hook \"{}\" failed at {}: {}", entry.name, stage.name(), e);
            }
        }
    }

    /// Number of handlers registered for a stage
    pub fn count(&self, stage: HookStage) -> usize {
        self.entries.iter().filter(|e| e.stage == stage).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn test_handlers_run_in_registration_order() {
        let mut registry = HookRegistry::new();
        registry.register(HookStage::PreBuild, "first", |ctx| {
            ctx.set("trace", Value::String("a".to_string()));
            Ok(())
        });
        registry.register(HookStage::PreBuild, "second", |ctx| {
            let so_far = ctx
                .get("trace")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            ctx.set("trace", Value::String(so_far + "b"));
            Ok(())
        });

        let mut ctx = HookContext::new();
        registry.run(HookStage::PreBuild, &mut ctx);

        assert_eq!(ctx.get("trace").unwrap().as_str(), Some("ab"));
    }

    #[test]
    fn test_failing_handler_does_not_stop_later_ones() {
        let mut registry = HookRegistry::new();
        registry.register(HookStage::PostBuild, "broken", |_| Err("boom".to_string()));
        registry.register(HookStage::PostBuild, "survivor", |ctx| {
            ctx.set("ran", Value::Bool(true));
            Ok(())
        });

        let mut ctx = HookContext::new();
        registry.run(HookStage::PostBuild, &mut ctx);

        assert_eq!(ctx.get("ran"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_stages_are_independent() {
        let mut registry = HookRegistry::new();
        registry.register(HookStage::PreBuild, "only-pre", |ctx| {
            ctx.set("pre", Value::Bool(true));
            Ok(())
        });

        let mut ctx = HookContext::new();
        registry.run(HookStage::PostBuild, &mut ctx);

        assert!(ctx.get("pre").is_none());
        assert_eq!(registry.count(HookStage::PreBuild), 1);
        assert_eq!(registry.count(HookStage::PostBuild), 0);
    }
}
