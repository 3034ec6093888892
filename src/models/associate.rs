use serde::{Deserialize, Serialize};

/// Column headers recognised in the exported report.
pub mod columns {
    pub const ASSOCIATE_ID: &str = "Associate ID";
    pub const NAME: &str = "Name";
    pub const LEVEL: &str = "Level";
    pub const DEPTH_LEVEL: &str = "Depth Level";
    pub const STATUS: &str = "Status";

    pub const PERSONAL_PREMIUM_MTD: &[&str] = &["Personal Premium MTD"];
    pub const PERSONAL_PREMIUM_PMTD: &[&str] = &["Personal Premium PMTD"];
    pub const PERSONAL_PREMIUM_YTD: &[&str] = &["Personal Premium YTD"];
    pub const PERSONAL_RECRUITS_MTD: &[&str] = &["Personal Recruits MTD"];
    pub const PERSONAL_RECRUITS_PMTD: &[&str] = &["Personal Recruits PMTD"];
    pub const PERSONAL_RECRUITS_YTD: &[&str] = &["Personal Recruits YTD"];
    pub const ORG_PREMIUM_MTD: &[&str] = &[
        "Org Premium MTD",
        "Organization Premium MTD",
        "Total Premium MTD",
    ];
    pub const ORG_PREMIUM_PMTD: &[&str] = &[
        "Org Premium PMTD",
        "Organization Premium PMTD",
        "Total Premium PMTD",
    ];
    pub const ORG_RECRUITS_MTD: &[&str] = &[
        "Org Recruits MTD",
        "Organization Recruits MTD",
        "Total Recruits MTD",
    ];
    pub const ORG_RECRUITS_PMTD: &[&str] = &[
        "Org Recruits PMTD",
        "Organization Recruits PMTD",
        "Total Recruits PMTD",
    ];

    /// Header substrings that mark a column as numeric.
    pub const NUMERIC_MARKERS: &[&str] = &["Premium", "Recruits", "Total", "Level"];
}

/// A coerced cell from the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(_) => 0.0,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

/// One data row: header name → coerced value, in header order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub fields: Vec<(String, FieldValue)>,
}

impl RawRow {
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn text(&self, column: &str) -> String {
        self.get(column).map(FieldValue::as_text).unwrap_or_default()
    }

    /// First alias present wins; absent columns read as 0.
    pub fn number(&self, aliases: &[&str]) -> f64 {
        aliases
            .iter()
            .find_map(|alias| self.get(alias))
            .map(FieldValue::as_number)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssociateStatus {
    Active,
    NotVested,
    OnHold,
    Unrecognized(String),
}

impl AssociateStatus {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "" => AssociateStatus::Active,
            "D" => AssociateStatus::NotVested,
            "H" => AssociateStatus::OnHold,
            other => AssociateStatus::Unrecognized(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociateRecord {
    pub id: String,
    pub name: String,
    pub level: f64,       // rank code, kept exactly as parsed
    pub depth_level: f64, // 0 = root, 1 = leg; fractional depths match neither
    pub status_code: String, // "" | "D" | "H", anything else is kept verbatim
    pub personal_premium_mtd: f64,
    pub personal_premium_pmtd: f64,
    pub personal_premium_ytd: f64,
    pub personal_recruits_mtd: f64,
    pub personal_recruits_pmtd: f64,
    pub personal_recruits_ytd: f64,
    pub org_premium_mtd: f64,
    pub org_premium_pmtd: f64,
    pub org_recruits_mtd: f64,
    pub org_recruits_pmtd: f64,
}

impl AssociateRecord {
    /// Builds a typed record from a coerced row; `id` has already been resolved.
    pub fn from_row(row: &RawRow, id: String) -> Self {
        AssociateRecord {
            id,
            name: row.text(columns::NAME),
            level: row.number(&[columns::LEVEL]),
            depth_level: row.number(&[columns::DEPTH_LEVEL]),
            status_code: row.text(columns::STATUS),
            personal_premium_mtd: row.number(columns::PERSONAL_PREMIUM_MTD),
            personal_premium_pmtd: row.number(columns::PERSONAL_PREMIUM_PMTD),
            personal_premium_ytd: row.number(columns::PERSONAL_PREMIUM_YTD),
            personal_recruits_mtd: row.number(columns::PERSONAL_RECRUITS_MTD),
            personal_recruits_pmtd: row.number(columns::PERSONAL_RECRUITS_PMTD),
            personal_recruits_ytd: row.number(columns::PERSONAL_RECRUITS_YTD),
            org_premium_mtd: row.number(columns::ORG_PREMIUM_MTD),
            org_premium_pmtd: row.number(columns::ORG_PREMIUM_PMTD),
            org_recruits_mtd: row.number(columns::ORG_RECRUITS_MTD),
            org_recruits_pmtd: row.number(columns::ORG_RECRUITS_PMTD),
        }
    }

    pub fn status(&self) -> AssociateStatus {
        AssociateStatus::from_code(&self.status_code)
    }

    pub fn is_root(&self) -> bool {
        self.depth_level == 0.0
    }

    pub fn is_leg(&self) -> bool {
        self.depth_level == 1.0
    }

    pub fn rank_title(&self) -> String {
        rank_title(self.level)
    }
}

const RANK_TITLES: [&str; 11] = [
    "Associate",
    "Senior Associate",
    "Marketing Director",
    "Senior Director",
    "Executive Director",
    "Senior Executive Director",
    "National Director",
    "Senior National Director",
    "Executive National Director",
    "Field Chairman",
    "Chairman's Council",
];

/// Display title for a rank code; anything but a whole number in 1–11 gets a generic label.
pub fn rank_title(level: f64) -> String {
    if level.fract() == 0.0 && (1.0..=11.0).contains(&level) {
        RANK_TITLES[level as usize - 1].to_string()
    } else {
        format!("Level {level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_rank_codes_and_falls_back_for_unknown() {
        assert_eq!(rank_title(1.0), "Associate");
        assert_eq!(rank_title(5.0), "Executive Director");
        assert_eq!(rank_title(11.0), "Chairman's Council");
        assert_eq!(rank_title(0.0), "Level 0");
        assert_eq!(rank_title(42.0), "Level 42");
        assert_eq!(rank_title(2.5), "Level 2.5");
        assert_eq!(rank_title(-3.0), "Level -3");
    }

    #[test]
    fn decodes_status_codes_after_trimming() {
        assert_eq!(AssociateStatus::from_code(""), AssociateStatus::Active);
        assert_eq!(AssociateStatus::from_code("  "), AssociateStatus::Active);
        assert_eq!(AssociateStatus::from_code(" D "), AssociateStatus::NotVested);
        assert_eq!(AssociateStatus::from_code("H"), AssociateStatus::OnHold);
        assert_eq!(
            AssociateStatus::from_code("X"),
            AssociateStatus::Unrecognized("X".to_string())
        );
    }

    #[test]
    fn reads_org_columns_through_aliases() {
        let row = RawRow {
            fields: vec![
                ("Total Premium MTD".to_string(), FieldValue::Number(250.0)),
                ("Name".to_string(), FieldValue::Text("Ana".to_string())),
            ],
        };

        let record = AssociateRecord::from_row(&row, "a-1".to_string());
        assert_eq!(record.org_premium_mtd, 250.0);
        assert_eq!(record.org_premium_pmtd, 0.0);
        assert_eq!(record.name, "Ana");
        assert!(record.is_root());
    }
}
