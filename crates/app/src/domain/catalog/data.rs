//! The nine demo products and the listing tabs built over them.

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;

use super::models::{CatalogTab, Product};

/// Number of products each listing tab shows.
pub const TAB_SIZE: usize = 9;

fn item(
    id: &str,
    name: &str,
    image: &str,
    price_individual: Decimal,
    price_bulk: Decimal,
    blurb: &str,
    tags: &[&str],
) -> Product {
    Product {
        id: id.to_owned(),
        name: name.to_owned(),
        image: image.to_owned(),
        price_individual,
        price_bulk,
        blurb: Some(blurb.to_owned()),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}

/// The full demo catalog.
pub fn demo_products() -> Vec<Product> {
    vec![
        item(
            "ethiopia",
            "Ethiopia Roast",
            "product1.png",
            Decimal::new(1250, 2),
            Decimal::new(1099, 2),
            "Floral, citrus, honey",
            &["New"],
        ),
        item(
            "colombia",
            "Colombia Supremo",
            "product2.png",
            Decimal::new(1175, 2),
            Decimal::new(995, 2),
            "Caramel, nutty, smooth",
            &[],
        ),
        item(
            "house",
            "House Blend",
            "product3.png",
            Decimal::new(1050, 2),
            Decimal::new(899, 2),
            "Balanced, everyday cup",
            &[],
        ),
        item(
            "sumatra",
            "Sumatra Dark",
            "product1.png",
            Decimal::new(1320, 2),
            Decimal::new(1125, 2),
            "Earthy, cocoa, bold",
            &[],
        ),
        item(
            "kenya",
            "Kenya AA",
            "product2.png",
            Decimal::new(1400, 2),
            Decimal::new(1220, 2),
            "Berry, bright, juicy",
            &["New"],
        ),
        item(
            "brazil",
            "Brazil Santos",
            "product3.png",
            Decimal::new(1090, 2),
            Decimal::new(940, 2),
            "Nutty, chocolate, smooth",
            &[],
        ),
        item(
            "decaf",
            "Decaf Swiss",
            "product1.png",
            Decimal::new(1120, 2),
            Decimal::new(970, 2),
            "Gentle, clean, balanced",
            &[],
        ),
        item(
            "guatemala",
            "Guatemala Huehue",
            "product2.png",
            Decimal::new(1210, 2),
            Decimal::new(1060, 2),
            "Cocoa, spice, sweet",
            &[],
        ),
        item(
            "espresso",
            "Espresso Forte",
            "product3.png",
            Decimal::new(1375, 2),
            Decimal::new(1195, 2),
            "Dense, caramel, crema",
            &[],
        ),
    ]
}

/// Looks up a catalog product by id.
pub fn product(id: &str) -> Option<Product> {
    demo_products().into_iter().find(|p| p.id == id)
}

/// The products a listing tab shows.
///
/// Tag-matched products come first; when a tab has no tagged products
/// it falls back to an every-third slice of the catalog, and every tab
/// is padded from the full set to [`TAB_SIZE`] unique entries.
pub fn tab_listing(tab: CatalogTab) -> Vec<Product> {
    let all = demo_products();

    let (tag_names, fallback_offset): (&[&str], usize) = match tab {
        CatalogTab::NewArrivals => (&["new", "new arrival", "new-arrival"], 0),
        CatalogTab::BestSellers => (&["best", "bestseller", "best seller"], 1),
        CatalogTab::TopRated => (&["top", "top rated", "top-rated"], 2),
    };

    let mut listing: Vec<Product> = all
        .iter()
        .filter(|p| p.has_tag(tag_names))
        .cloned()
        .collect();

    if listing.is_empty() {
        listing = all
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 3 == fallback_offset)
            .map(|(_, p)| p.clone())
            .collect();
    }

    let mut seen: FxHashSet<String> = listing.iter().map(|p| p.id.clone()).collect();

    for candidate in &all {
        if listing.len() >= TAB_SIZE {
            break;
        }

        if seen.insert(candidate.id.clone()) {
            listing.push(candidate.clone());
        }
    }

    listing.truncate(TAB_SIZE);
    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_nine_products_with_distinct_ids() {
        let products = demo_products();
        let ids: FxHashSet<_> = products.iter().map(|p| p.id.clone()).collect();

        assert_eq!(products.len(), 9);
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn product_lookup_by_id() {
        let kenya = product("kenya").expect("kenya is in the catalog");

        assert_eq!(kenya.name, "Kenya AA");
        assert!(product("teapot").is_none());
    }

    #[test]
    fn tagged_tab_leads_with_tagged_products() {
        let listing = tab_listing(CatalogTab::NewArrivals);

        assert_eq!(listing.len(), TAB_SIZE);
        assert_eq!(listing.first().map(|p| p.id.as_str()), Some("ethiopia"));
        assert_eq!(listing.get(1).map(|p| p.id.as_str()), Some("kenya"));
    }

    #[test]
    fn untagged_tab_falls_back_and_pads_to_size() {
        let listing = tab_listing(CatalogTab::BestSellers);
        let ids: FxHashSet<_> = listing.iter().map(|p| p.id.clone()).collect();

        assert_eq!(listing.len(), TAB_SIZE);
        assert_eq!(ids.len(), TAB_SIZE, "padding must not duplicate products");
        // fallback slice: indexes 1, 4, 7
        assert_eq!(listing.first().map(|p| p.id.as_str()), Some("colombia"));
        assert_eq!(listing.get(1).map(|p| p.id.as_str()), Some("kenya"));
        assert_eq!(listing.get(2).map(|p| p.id.as_str()), Some("guatemala"));
    }
}
