use itertools::Itertools;
use portal_api_types::Faq;

/// Active FAQs ordered by `ordem_exibicao`; ties keep backend order.
pub fn display_order(faqs: impl IntoIterator<Item = Faq>) -> Vec<Faq> {
    faqs.into_iter()
        .filter(|faq| faq.active)
        .sorted_by_key(|faq| faq.display_order)
        .collect()
}

/// Sorted distinct non-empty categories, for the category selector.
pub fn categories(faqs: &[Faq]) -> Vec<String> {
    faqs.iter()
        .filter_map(|faq| faq.category.as_deref())
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .unique()
        .sorted()
        .map(str::to_owned)
        .collect()
}
