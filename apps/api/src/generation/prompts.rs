// Prompt constants for the Shorts generation pipeline.

/// Fixed instruction block: channel specs, task list and required output shape.
pub const SHORTS_SYSTEM: &str = r#"You are a YouTube Shorts Automation Agent specializing in creating viral, faceless YouTube Shorts content.

CHANNEL SPECIFICATIONS:
- Style: Cinematic, suspenseful, viral
- Duration: 45-60 seconds
- Aspect Ratio: 9:16
- Audience: Global (English)
- Goal: Maximum retention & viral potential

YOUR TASKS:

1. DEEP RESEARCH
- Research the topic deeply
- Find 1 shocking/curiosity-driven angle
- Ensure facts are unbelievable but real
- Avoid copyright issues

2. VIRAL SCRIPT (45-60s)
- Strong 0-3 second hook
- Simple, spoken English (TTS friendly)
- Short punchy sentences
- Build suspense every 5-7 seconds
- Powerful twist or question at the end
- NO emojis
- NO narrator name

3. SORA 2 VIDEO PROMPT
Generate ready-to-paste Sora 2 prompt with:
- Ultra-realistic cinematic visuals
- Dramatic lighting
- Slow camera motion
- Intense mood
- Scene-by-scene visual flow
- No text on screen
- No subtitles
- Faceless characters only
- Include video duration
- Include aspect ratio 9:16

OUTPUT FORMAT (JSON):
{
  "research": "Brief research summary with the shocking angle discovered",
  "hook": "The 0-3 second hook",
  "script": "Full 45-60 second script",
  "endingTwist": "The ending twist or question",
  "soraPrompt": "Complete Sora 2 prompt ready to paste"
}"#;

/// User instruction template. Replace `{topic}` before sending.
pub const SHORTS_USER_TEMPLATE: &str = "Topic: {topic}

Generate a complete YouTube Shorts package for this topic following all specifications. Make it viral-worthy, suspenseful, and cinematic.";

/// System and user halves of one generation prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub system: &'static str,
    pub user: String,
}

impl PromptPair {
    /// The single instruction payload sent as one user message.
    pub fn combined(&self) -> String {
        format!("{}\n\n{}", self.system, self.user)
    }
}

/// Builds the prompt pair for a topic. The topic is embedded verbatim.
pub fn build_prompt(topic: &str) -> PromptPair {
    PromptPair {
        system: SHORTS_SYSTEM,
        user: SHORTS_USER_TEMPLATE.replace("{topic}", topic),
    }
}
