use serde::{Deserialize, Serialize};

/// The five-part short-video package returned to the caller.
///
/// Every field is optional: a JSON reply from the model may omit keys, and
/// those stay absent in the serialized output. The marker scan always fills
/// all five, possibly with empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPackage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_twist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sora_prompt: Option<String>,
}

impl GeneratedPackage {
    /// Number of fields that carry a value (empty strings count).
    pub fn present_fields(&self) -> usize {
        [
            &self.research,
            &self.hook,
            &self.script,
            &self.ending_twist,
            &self.sora_prompt,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }
}
