//! Rule-based chat replies.
//!
//! Rules are checked in order and match on lowercase substrings. A message
//! that matches no rule gets a general reply with one tip appended; the tip
//! is picked from the caller's seed so replies stay reproducible.

use serde::Serialize;

use super::types::{ChatReply, Intent, Tool};

pub const GREETING: &str = "Hi, I'm your finance assistant. Click suggestions or type a question.";

pub const BUDGET_TIP: &str = "Budget tip: 50/30/20 rule. 50% needs, 30% wants, 20% savings.";

pub const QUICK_FACTS: [&str; 3] = [
    "Start small: consistency beats timing the market.",
    "Emergency fund: 3-6 months expenses.",
    "Tax planning can increase net returns.",
];

pub const TIPS: [&str; 3] = [
    "Automate savings: little and often works best.",
    "Emergency fund = 3-6 months of expenses.",
    "Diversify: mix safer instruments and growth assets.",
];

const GENERAL_PREFIX: &str = "I can help with savings, taxes and investments. ";

struct Rule {
    keywords: &'static [&'static str],
    intent: Intent,
    tool: Tool,
    response: &'static str,
}

const RULES: [Rule; 3] = [
    Rule {
        keywords: &["save", "savings", "goal"],
        intent: Intent::Savings,
        tool: Tool::SavingsGoal,
        response: "Try the 'Savings Goal' tool or type: 'I want to save 20000 in 6 months'.",
    },
    Rule {
        keywords: &["tax", "taxes", "income"],
        intent: Intent::Tax,
        tool: Tool::TaxEstimator,
        response: "Use 'Tax Estimator' or type: 'estimate tax on 500000'.",
    },
    Rule {
        keywords: &["invest", "returns"],
        intent: Intent::Investment,
        tool: Tool::InvestmentProjection,
        response: "Use 'Investment Projection' tool to simulate returns.",
    },
];

pub fn reply(message: &str, seed: u64) -> ChatReply {
    let msg = message.to_lowercase();
    for rule in &RULES {
        if rule.keywords.iter().any(|kw| msg.contains(*kw)) {
            return ChatReply {
                intent: rule.intent,
                text: rule.response.to_string(),
                suggested_tool: Some(rule.tool),
            };
        }
    }

    ChatReply {
        intent: Intent::General,
        text: format!("{GENERAL_PREFIX}{}", tip_for_seed(seed)),
        suggested_tool: None,
    }
}

pub fn tip_for_seed(seed: u64) -> &'static str {
    TIPS[(splitmix64(seed) % TIPS.len() as u64) as usize]
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

impl Tool {
    pub fn label(self) -> &'static str {
        match self {
            Tool::SavingsGoal => "Savings Goal",
            Tool::TaxEstimator => "Tax Estimator",
            Tool::InvestmentProjection => "Investment Projection",
        }
    }
}

/// Quick-action chips shown under the chat input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Suggestion {
    Savings,
    TaxEstimator,
    InvestmentProjection,
    BudgetTips,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SuggestionAction {
    OpenTool(Tool),
    Say(&'static str),
}

impl Suggestion {
    pub const ALL: [Suggestion; 4] = [
        Suggestion::Savings,
        Suggestion::TaxEstimator,
        Suggestion::InvestmentProjection,
        Suggestion::BudgetTips,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Suggestion::Savings => "Savings",
            Suggestion::TaxEstimator => "Tax Estimator",
            Suggestion::InvestmentProjection => "Investment Projection",
            Suggestion::BudgetTips => "Budget Tips",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }

    pub fn action(self) -> SuggestionAction {
        match self {
            Suggestion::Savings => SuggestionAction::OpenTool(Tool::SavingsGoal),
            Suggestion::TaxEstimator => SuggestionAction::OpenTool(Tool::TaxEstimator),
            Suggestion::InvestmentProjection => {
                SuggestionAction::OpenTool(Tool::InvestmentProjection)
            }
            Suggestion::BudgetTips => SuggestionAction::Say(BUDGET_TIP),
        }
    }
}
