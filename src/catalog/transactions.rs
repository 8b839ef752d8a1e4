// ABOUTME: Sample transaction records shown on the data panel

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: &'static str,
    pub amount: u64,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub account: &'static str,
    pub timestamp: &'static str,
}

pub const SAMPLE_TRANSACTIONS: [Transaction; 5] = [
    Transaction {
        id: "TXN001",
        amount: 9500,
        kind: "Cash Deposit",
        account: "ACC123456",
        timestamp: "2024-01-15 09:30:00",
    },
    Transaction {
        id: "TXN002",
        amount: 9800,
        kind: "Wire Transfer",
        account: "ACC123456",
        timestamp: "2024-01-15 14:45:00",
    },
    Transaction {
        id: "TXN003",
        amount: 8900,
        kind: "Cash Deposit",
        account: "ACC123456",
        timestamp: "2024-01-16 10:15:00",
    },
    Transaction {
        id: "TXN004",
        amount: 9200,
        kind: "International Wire",
        account: "ACC123456",
        timestamp: "2024-01-16 16:20:00",
    },
    Transaction {
        id: "TXN005",
        amount: 9600,
        kind: "Cash Deposit",
        account: "ACC789012",
        timestamp: "2024-01-17 11:00:00",
    },
];

/// Summary badges above the table
pub const DATASET_BADGES: [&str; 3] = ["5,000 transactions", "50 accounts", "30 days period"];

pub const DATA_GENERATION_NOTES: &str = "Sample data includes realistic transaction patterns, \
amounts near reporting thresholds, and temporal clustering to simulate structuring behavior.";

/// Format a whole-dollar amount with thousands separators, e.g. `$9,500`
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}
