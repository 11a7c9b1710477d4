//! The procrastination shop: a fixed catalog bought with banked points.
//! Insufficient points is a boolean outcome, not an error; the caller
//! decides how to phrase the bad news.

use crate::engine::Ledger;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Rewards,
    Excuses,
    Boosts,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rewards => "rewards",
            Self::Excuses => "excuses",
            Self::Boosts => "boosts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub category: Category,
}

pub const CATALOG: [ShopItem; 6] = [
    ShopItem {
        id: "1",
        name: "Coffee Break Excuse",
        description: "Perfect excuse for a 30-minute coffee break",
        cost: 50,
        category: Category::Excuses,
    },
    ShopItem {
        id: "2",
        name: "Gaming Session Pass",
        description: "2-hour guilt-free gaming session",
        cost: 120,
        category: Category::Rewards,
    },
    ShopItem {
        id: "3",
        name: "Productivity Immunity",
        description: "Immune to guilt for 1 day",
        cost: 200,
        category: Category::Boosts,
    },
    ShopItem {
        id: "4",
        name: "Music Listening Marathon",
        description: "Justify 3 hours of just listening to music",
        cost: 80,
        category: Category::Rewards,
    },
    ShopItem {
        id: "5",
        name: "Ultimate Procrastinator Badge",
        description: "Show off your avoidance mastery",
        cost: 500,
        category: Category::Rewards,
    },
    ShopItem {
        id: "6",
        name: "Social Media Deep Dive",
        description: "Spend 2 hours scrolling guilt-free",
        cost: 75,
        category: Category::Excuses,
    },
];

pub fn find_item(id: &str) -> Option<&'static ShopItem> {
    CATALOG.iter().find(|item| item.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub item: &'static ShopItem,
    pub success: bool,
    /// Points still missing when the purchase failed.
    pub shortfall: u64,
}

/// Buy a catalog item. Unknown ids and repurchases are input errors; not
/// being able to afford it is a normal `success: false` outcome.
pub fn buy(
    ledger: &mut Ledger<'_>,
    owned: &mut Vec<String>,
    id: &str,
) -> Result<PurchaseReceipt, AppError> {
    let item = find_item(id)
        .ok_or_else(|| AppError::invalid_input(format!("no shop item with id {id}")))?;

    if owned.iter().any(|owned_id| owned_id == item.id) {
        return Err(AppError::invalid_input(format!(
            "{} is already owned",
            item.name
        )));
    }

    if ledger.purchase(item.cost) {
        owned.push(item.id.to_string());
        Ok(PurchaseReceipt {
            item,
            success: true,
            shortfall: 0,
        })
    } else {
        Ok(PurchaseReceipt {
            item,
            success: false,
            shortfall: item.cost - ledger.total_points(),
        })
    }
}
