use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Serialize;

use crate::donations::Dimension;
use crate::engine::Aggregation;
use crate::ranking::RankedList;

pub const DATASET_LABEL: &str = "Amount Received in INR";

pub const PALETTE: [&str; 15] = [
    "#e67e22", "#3498db", "#2ecc71", "#7f8c8d", "#34495e", "#9b59b6", "#FFDC00", "#001f3f",
    "#39CCCC", "#01FF70", "#85144b", "#F012BE", "#3D9970", "#111111", "#AAAAAA",
];

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;

const UNITS: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];
const TENS: [&str; 10] = [
    "", "Ten", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Everything a chart needs for one view of one dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: &'static str,
    pub dataset_label: &'static str,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub background_colors: Vec<&'static str>,
}

impl ChartSeries {
    /// Bar view over every entity, in first-occurrence order.
    pub fn from_aggregation(dimension: Dimension, aggregation: &Aggregation) -> Self {
        let (labels, data): (Vec<String>, Vec<f64>) = aggregation
            .iter()
            .map(|(name, total)| (name.to_string(), total))
            .unzip();
        Self::new(dimension.all_title(), labels, data)
    }

    /// Pie view over the ranked entities.
    pub fn from_ranked(dimension: Dimension, ranked: &RankedList) -> Self {
        let (labels, data): (Vec<String>, Vec<f64>) = ranked
            .iter()
            .map(|entry| (entry.entity_name.clone(), entry.total_amount))
            .unzip();
        Self::new(dimension.top_title(), labels, data)
    }

    fn new(title: &'static str, labels: Vec<String>, data: Vec<f64>) -> Self {
        let background_colors = PALETTE.iter().copied().cycle().take(data.len()).collect();
        Self {
            title,
            dataset_label: DATASET_LABEL,
            labels,
            data,
            background_colors,
        }
    }
}

/// One output line of the dashboard CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub dimension: &'static str,
    pub view: &'static str,
    pub rank: Option<usize>,
    pub entity: String,
    pub amount: f64,
    pub display: String,
}

impl ChartRow {
    pub fn all_rows(dimension: Dimension, aggregation: &Aggregation) -> Vec<ChartRow> {
        aggregation
            .iter()
            .map(|(name, total)| ChartRow {
                dimension: dimension.name(),
                view: "all",
                rank: None,
                entity: name.to_string(),
                amount: total,
                display: format_inr(total),
            })
            .collect()
    }

    pub fn top_rows(dimension: Dimension, ranked: &RankedList) -> Vec<ChartRow> {
        ranked
            .iter()
            .zip(1..)
            .map(|(entry, rank)| ChartRow {
                dimension: dimension.name(),
                view: "top",
                rank: Some(rank),
                entity: entry.entity_name.clone(),
                amount: entry.total_amount,
                display: format_inr(entry.total_amount),
            })
            .collect()
    }
}

/// Human readable rupee amount for axis labels.
///
/// One crore and above is shown as a crore figure (`"1.5 Cr"`), anything smaller is spelled
/// out in the Indian numbering system. Fractional rupees are dropped.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }
    if amount < 0.0 {
        let positive = format_inr(-amount);
        return if positive == "0" {
            positive
        } else {
            format!("Minus {}", positive)
        };
    }

    if amount >= CRORE as f64 {
        return match Decimal::from_f64(amount) {
            Some(value) => {
                let crores = (value / Decimal::from(CRORE)).round_dp(2).normalize();
                format!("{} Cr", crores)
            }
            None => format!("{:.2} Cr", amount / CRORE as f64),
        };
    }

    let rupees = amount.trunc() as u64;
    if rupees == 0 {
        return "0".to_string();
    }
    format!("{} Rupees", spell_out(rupees))
}

fn spell_out(rupees: u64) -> String {
    let groups = [
        (rupees / LAKH, "Lakh"),
        ((rupees % LAKH) / THOUSAND, "Thousand"),
    ];

    let mut words: Vec<String> = groups
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| format!("{} {}", below_hundred(*count), unit))
        .collect();

    let rest = rupees % THOUSAND;
    if rest >= 100 {
        words.push(format!("{} Hundred", UNITS[(rest / 100) as usize]));
    }
    if rest % 100 > 0 {
        words.push(below_hundred(rest % 100));
    }
    words.join(" ")
}

fn below_hundred(n: u64) -> String {
    match n {
        0..=9 => UNITS[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        _ if n % 10 == 0 => TENS[(n / 10) as usize].to_string(),
        _ => format!("{} {}", TENS[(n / 10) as usize], UNITS[(n % 10) as usize]),
    }
}
