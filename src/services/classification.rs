use serde::{Deserialize, Serialize};

/// Marketing section a category is shown under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Beauty,
    Cabinets,
    Stones,
    Other,
}

impl ProductType {
    /// Section order on the storefront.
    pub const ALL: [ProductType; 4] = [
        ProductType::Beauty,
        ProductType::Cabinets,
        ProductType::Stones,
        ProductType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Beauty => "beauty",
            ProductType::Cabinets => "cabinets",
            ProductType::Stones => "stones",
            ProductType::Other => "other",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ProductType::Beauty => "Beauty & Fragrance",
            ProductType::Cabinets => "Cabinets & Furniture",
            ProductType::Stones => "Natural Stone & Surfaces",
            ProductType::Other => "More to Explore",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProductType::Beauty => "Perfumes, cosmetics and personal care essentials",
            ProductType::Cabinets => "Kitchen, bath and storage cabinetry built to last",
            ProductType::Stones => "Marble, granite and quartz for floors, walls and counters",
            ProductType::Other => "Everything else from our collection",
        }
    }
}

impl std::str::FromStr for ProductType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beauty" => Ok(ProductType::Beauty),
            "cabinets" => Ok(ProductType::Cabinets),
            "stones" => Ok(ProductType::Stones),
            "other" => Ok(ProductType::Other),
            _ => Err(()),
        }
    }
}

pub struct ClassificationRule {
    pub product_type: ProductType,
    pub keywords: &'static [&'static str],
}

impl ClassificationRule {
    fn matches(&self, name: &str, slug: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| name.contains(keyword) || slug.contains(keyword))
    }
}

/// Evaluated top to bottom; the first rule with a matching keyword decides. A category whose
/// name mentions both "vanity" and "marble" is therefore a cabinet, not a stone.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        product_type: ProductType::Beauty,
        keywords: &[
            "perfume",
            "fragrance",
            "cologne",
            "cosmetic",
            "makeup",
            "make-up",
            "skincare",
            "skin-care",
            "beauty",
            "lipstick",
        ],
    },
    ClassificationRule {
        product_type: ProductType::Cabinets,
        keywords: &[
            "cabinet",
            "furniture",
            "cupboard",
            "wardrobe",
            "vanity",
            "vanities",
            "drawer",
            "shelf",
            "shelves",
            "bath",
        ],
    },
    ClassificationRule {
        product_type: ProductType::Stones,
        keywords: &[
            "stone",
            "marble",
            "granite",
            "quartz",
            "onyx",
            "travertine",
            "limestone",
            "slate",
            "tile",
        ],
    },
];

pub fn classify_product_type(category_name: &str, category_slug: &str) -> ProductType {
    let name = category_name.to_lowercase();
    let slug = category_slug.to_lowercase();

    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(&name, &slug))
        .map(|rule| rule.product_type)
        .unwrap_or(ProductType::Other)
}
