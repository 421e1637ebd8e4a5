use std::collections::HashMap;
use serde_yaml::Value;

/// Build stages a hook can attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookStage {
    /// Before any content is read
    PreBuild,
    /// After all collections are loaded and tags aggregated
    PostCollections,
    /// Before templates render
    PreRender,
    /// After all output is written
    PostBuild,
}

impl HookStage {
    /// Stable name of the stage, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            HookStage::PreBuild => "pre_build",
            HookStage::PostCollections => "post_collections",
            HookStage::PreRender => "pre_render",
            HookStage::PostBuild => "post_build",
        }
    }
}

/// Accumulator passed through every handler of a stage in order.
///
/// Handlers either observe it or thread values through `data` for later
/// handlers and stages.
#[derive(Debug, Default)]
pub struct HookContext {
    /// Free-form values threaded between handlers
    pub data: HashMap<String, Value>,
}

impl HookContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}
