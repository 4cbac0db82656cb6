//! LINE message rendering: text, quick-reply panels, and the flex result
//! card. All user-facing (Japanese) wording lives here, including the
//! localized labels for the lens categories.

use serde::Serialize;
use serde_json::{json, Value};

use lensbot_core::{tasks, ClassificationInput, ClassificationResult, LensCategory};

/// Outbound LINE message payload.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LineMessage {
    Text {
        text: String,
        #[serde(rename = "quickReply", skip_serializing_if = "Option::is_none")]
        quick_reply: Option<QuickReply>,
    },
    Flex {
        #[serde(rename = "altText")]
        alt_text: String,
        contents: Value,
    },
}

impl LineMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into(), quick_reply: None }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct QuickReply {
    pub items: Vec<QuickReplyItem>,
}

#[derive(Serialize, Debug, Clone)]
pub struct QuickReplyItem {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub action: MessageAction,
}

#[derive(Serialize, Debug, Clone)]
pub struct MessageAction {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub label: String,
    pub text: String,
}

impl QuickReplyItem {
    fn message(label: &str, text: &str) -> Self {
        Self {
            kind: "action",
            action: MessageAction {
                kind: "message",
                label: label.to_owned(),
                text: text.to_owned(),
            },
        }
    }
}

/// Japanese display label for a lens category.
pub fn category_label(category: LensCategory) -> &'static str {
    match category {
        LensCategory::DistanceSingleVision => "単焦点（遠用）",
        LensCategory::NearSingleVision => "単焦点（近用）",
        LensCategory::ProgressiveDaily => "遠近両用（デイリー）",
        LensCategory::OfficeProgressive => "中近（室内）",
        LensCategory::DeskProgressive => "近々（デスク）",
    }
}

pub const INPUT_EXAMPLE: &str = "運転,PC,スマホ\n48\n40,60";

/// Usage text for the help triggers.
pub fn help_message() -> LineMessage {
    LineMessage::text(format!(
        "3行で送ると自動診断します。\n例：\n{INPUT_EXAMPLE}\n（行ごとに改行して送ってね）\nまずは「診断開始」と送るとボタンが出ます。"
    ))
}

/// Example reply for messages that contain no recognized task name.
pub fn example_message() -> LineMessage {
    LineMessage::text(format!(
        "入力例：\n{INPUT_EXAMPLE}\n（まずは「診断開始」と送るとボタンが出ます）"
    ))
}

/// Entry panel: one quick-reply chip per task, plus a pre-filled example.
pub fn intro_message() -> LineMessage {
    let mut items: Vec<QuickReplyItem> = tasks::TASK_NAMES
        .iter()
        .map(|name| QuickReplyItem::message(name, name))
        .collect();
    items.push(QuickReplyItem::message("入力例", INPUT_EXAMPLE));
    LineMessage::Text {
        text: "用途を選んでください（複数OK）→ 次に年齢と距離を送ります".to_owned(),
        quick_reply: Some(QuickReply { items }),
    }
}

/// `40cm ≈ 2.5D` style line, with `?` placeholders for unknown values.
fn demand_line(label: &str, cm: u32, demand_d: f64) -> String {
    let cm = if cm == 0 { "?".to_owned() } else { cm.to_string() };
    let d = if demand_d == 0.0 { "?".to_owned() } else { format!("{demand_d}") };
    format!("{label} {cm}cm ≈ {d}D")
}

/// Flex bubble result card for a classification.
pub fn result_message(input: &ClassificationInput, result: &ClassificationResult) -> LineMessage {
    let label = category_label(result.category);
    let w = result.weights;
    let contents = json!({
        "type": "bubble",
        "header": {
            "type": "box",
            "layout": "vertical",
            "contents": [
                { "type": "text", "text": "メガネ簡易診断", "weight": "bold", "size": "sm", "color": "#888888" },
                { "type": "text", "text": format!("提案：{label}"), "weight": "bold", "size": "xl" },
            ],
        },
        "body": {
            "type": "box",
            "layout": "vertical",
            "spacing": "sm",
            "contents": [
                { "type": "text", "text": "用途スコア", "weight": "bold", "size": "sm" },
                {
                    "type": "box",
                    "layout": "horizontal",
                    "contents": [
                        { "type": "text", "text": format!("遠 {}", w.far), "size": "sm" },
                        { "type": "text", "text": format!("中 {}", w.mid), "size": "sm" },
                        { "type": "text", "text": format!("近 {}", w.near), "size": "sm" },
                    ],
                },
                { "type": "separator", "margin": "md" },
                { "type": "text", "text": "作業距離からの焦点要求", "weight": "bold", "size": "sm", "margin": "md" },
                { "type": "text", "text": demand_line("手元", input.near_distance_cm, result.near_demand_d), "size": "sm" },
                { "type": "text", "text": demand_line("PC", input.pc_distance_cm, result.pc_demand_d), "size": "sm" },
                { "type": "text", "text": format!("年齢ADD目安：{:.2}D", result.age_addition_d), "size": "sm", "margin": "sm" },
                { "type": "separator", "margin": "md" },
                {
                    "type": "text",
                    "text": "※最終度数は検眼・装用テストで決定",
                    "size": "xs",
                    "color": "#888888",
                    "wrap": true,
                },
            ],
        },
    });
    LineMessage::Flex { alt_text: format!("提案：{label}"), contents }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lensbot_core::classify;

    fn sample_input() -> ClassificationInput {
        ClassificationInput {
            task_names: vec!["読書".into(), "スマホ".into()],
            age: 52,
            near_distance_cm: 40,
            pc_distance_cm: 0,
        }
    }

    #[test]
    fn intro_panel_has_nine_chips() {
        let LineMessage::Text { quick_reply, .. } = intro_message() else {
            panic!("intro must be a text message");
        };
        let items = quick_reply.expect("intro carries a quick reply").items;
        assert_eq!(items.len(), 9);
        assert_eq!(items[0].action.label, "運転");
        assert_eq!(items[8].action.text, INPUT_EXAMPLE);
    }

    #[test]
    fn quick_reply_serializes_to_line_wire_shape() {
        let v = serde_json::to_value(intro_message()).unwrap();
        assert_eq!(v["type"], "text");
        assert_eq!(v["quickReply"]["items"][0]["type"], "action");
        assert_eq!(v["quickReply"]["items"][0]["action"]["type"], "message");
    }

    #[test]
    fn plain_text_omits_quick_reply_key() {
        let v = serde_json::to_value(help_message()).unwrap();
        assert!(v.get("quickReply").is_none());
    }

    #[test]
    fn result_card_carries_category_label() {
        let input = sample_input();
        let result = classify(&input);
        let LineMessage::Flex { alt_text, contents } = result_message(&input, &result) else {
            panic!("result must be a flex message");
        };
        assert_eq!(alt_text, "提案：単焦点（近用）");
        let header = contents["header"]["contents"][1]["text"].as_str().unwrap();
        assert_eq!(header, "提案：単焦点（近用）");
    }

    #[test]
    fn unknown_distance_renders_placeholders() {
        assert_eq!(demand_line("PC", 0, 0.0), "PC ?cm ≈ ?D");
        assert_eq!(demand_line("手元", 40, 2.5), "手元 40cm ≈ 2.5D");
    }
}
