#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
}

pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => product.category == category.as_str(),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }
}

/// Products matching `filter`, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Distinct categories in first-seen order.
pub fn categories(products: &[Product]) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category);
        }
    }
    seen
}

pub fn products() -> &'static [Product] {
    PRODUCTS
}

static PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Water Purification Systems",
        category: "Water Treatment",
        description: "Advanced water purification systems for pharmaceutical and laboratory applications.",
        image: "https://images.pexels.com/photos/2280571/pexels-photo-2280571.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["Type I/II/III Water", "UV Sterilization", "TOC Reduction", "USP Compliant"],
    },
    Product {
        id: 2,
        name: "RO Systems",
        category: "Reverse Osmosis",
        description: "High-efficiency reverse osmosis systems for pure water production.",
        image: "https://images.pexels.com/photos/257736/pexels-photo-257736.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["High Recovery Rate", "Low Operating Cost", "Automated Operation", "Remote Monitoring"],
    },
    Product {
        id: 3,
        name: "EDI Systems",
        category: "Electrodeionization",
        description: "Electrodeionization systems for continuous high-purity water production.",
        image: "https://images.pexels.com/photos/2280549/pexels-photo-2280549.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["Chemical-Free Operation", "Consistent Quality", "Low Maintenance", "Energy Efficient"],
    },
    Product {
        id: 4,
        name: "DI Systems",
        category: "Deionization",
        description: "Deionization systems for removing ionic impurities from water.",
        image: "https://images.pexels.com/photos/3735747/pexels-photo-3735747.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["High Purity Output", "Regenerable Resins", "Cost Effective", "Scalable Design"],
    },
    Product {
        id: 5,
        name: "Ultrafiltration Systems",
        category: "Filtration",
        description: "Advanced ultrafiltration for removing bacteria and endotoxins.",
        image: "https://images.pexels.com/photos/2280547/pexels-photo-2280547.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["0.01 Micron Filtration", "Pyrogen Removal", "High Flow Rate", "Easy Maintenance"],
    },
    Product {
        id: 6,
        name: "UV Sterilization Units",
        category: "Sterilization",
        description: "UV-based water sterilization systems for microbial control.",
        image: "https://images.pexels.com/photos/3825574/pexels-photo-3825574.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["254nm UV-C Light", "No Chemical Addition", "Instant Disinfection", "Low Power Consumption"],
    },
    Product {
        id: 7,
        name: "Storage & Distribution",
        category: "Infrastructure",
        description: "Complete storage and distribution systems for purified water.",
        image: "https://images.pexels.com/photos/1108572/pexels-photo-1108572.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["Sanitary Design", "Temperature Control", "Circulation Loops", "Validation Support"],
    },
    Product {
        id: 8,
        name: "Multi-Effect Distillation",
        category: "Distillation",
        description: "Multi-effect distillation systems for WFI production.",
        image: "https://images.pexels.com/photos/2280568/pexels-photo-2280568.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["WFI Quality", "Energy Efficient", "cGMP Compliant", "Automatic Operation"],
    },
    Product {
        id: 9,
        name: "Pure Steam Generators",
        category: "Steam Generation",
        description: "High-quality pure steam generators for sterilization applications.",
        image: "https://images.pexels.com/photos/4993237/pexels-photo-4993237.jpeg?auto=compress&cs=tinysrgb&w=800",
        features: &["Pyrogen-Free Steam", "Quick Start-up", "Compact Design", "Full Automation"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> Vec<Product> {
        let mut list = products().to_vec();
        list.push(Product {
            id: 10,
            name: "Compact RO",
            category: "Reverse Osmosis",
            description: "Bench-top reverse osmosis.",
            image: "",
            features: &[],
        });
        list
    }

    #[test]
    fn all_is_identity() {
        let list = sample();
        let filtered = filter_products(&list, &CategoryFilter::from("All"));
        assert_eq!(filtered.len(), list.len());
        assert!(filtered.iter().zip(list.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn exact_category_keeps_relative_order() {
        let list = sample();
        let filtered = filter_products(&list, &CategoryFilter::from("Reverse Osmosis"));
        let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 10]);
        assert!(filtered.iter().all(|p| p.category == "Reverse Osmosis"));
    }

    #[test]
    fn unknown_or_near_miss_category_is_empty() {
        let list = sample();
        assert!(filter_products(&list, &CategoryFilter::from("Nonexistent")).is_empty());
        assert!(filter_products(&list, &CategoryFilter::from("reverse osmosis")).is_empty());
        assert!(filter_products(&list, &CategoryFilter::from("all")).is_empty());
    }

    #[test]
    fn categories_are_distinct_in_catalog_order() {
        let cats = categories(&sample());
        assert_eq!(cats.len(), 9);
        assert_eq!(cats[0], "Water Treatment");
        assert_eq!(cats[1], "Reverse Osmosis");
        assert_eq!(cats[8], "Steam Generation");
    }

    #[test]
    fn filter_label_round_trips_sentinel() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(CategoryFilter::from("Filtration").label(), "Filtration");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let list = products();
        let ids: HashSet<u32> = list.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), list.len());
    }
}
