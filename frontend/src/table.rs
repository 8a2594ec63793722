//! Result table shared by the search panel and the per-category report.
//!
//! [`ResultTable::from_items`] is pure: it maps backend records to display
//! strings in input order (the backend already sorted them). [`ResultTable::view`]
//! turns that structure into markup.

use common::model::product::ResultItem;
use yew::prelude::*;

use crate::format::{fmt_fixed2, fmt_number, fmt_price, PLACEHOLDER};

/// Column labels, in display order.
pub const HEADER: [&str; 8] = [
    "รูป",
    "สินค้า",
    "ราคา",
    "ยอดขายสะสม",
    "เรตติ้ง",
    "คอมฯ (%)",
    "คะแนน",
    "ลิงก์",
];

const LINK_LABEL: &str = "เปิด";

/// One rendered table row. Every cell is already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// `None` renders an empty cell.
    pub image: Option<String>,
    pub name: String,
    pub price: String,
    pub sold: String,
    pub rating: String,
    pub commission: String,
    pub score: String,
    /// `None` renders the placeholder instead of a link.
    pub link: Option<String>,
}

impl ResultRow {
    pub fn from_item(item: &ResultItem) -> Self {
        Self {
            image: non_empty(item.image.as_deref()),
            name: non_empty(item.name.as_deref()).unwrap_or_else(|| PLACEHOLDER.to_string()),
            price: fmt_price(item.price.as_ref()),
            sold: fmt_number(item.historical_sold.as_ref()),
            rating: fmt_fixed2(item.rating_star.as_ref()),
            commission: fmt_fixed2(item.commission_rate.as_ref()),
            score: fmt_number(item.score.as_ref()),
            link: non_empty(item.url.as_deref()),
        }
    }

    fn view(&self) -> Html {
        html! {
            <tr>
                <td>
                    if let Some(src) = &self.image {
                        <img class="thumb" src={src.clone()} alt="" />
                    }
                </td>
                <td>{ self.name.clone() }</td>
                <td>{ self.price.clone() }</td>
                <td>{ self.sold.clone() }</td>
                <td>{ self.rating.clone() }</td>
                <td>{ self.commission.clone() }</td>
                <td>{ self.score.clone() }</td>
                <td class="links">
                    {
                        match &self.link {
                            Some(href) => html! {
                                <a href={href.clone()} target="_blank" rel="noopener">{ LINK_LABEL }</a>
                            },
                            None => html! { <>{ PLACEHOLDER }</> },
                        }
                    }
                </td>
            </tr>
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn from_items(items: &[ResultItem]) -> Self {
        Self {
            rows: items.iter().map(ResultRow::from_item).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn view(&self) -> Html {
        html! {
            <table>
                <thead>
                    <tr>
                        { for HEADER.iter().map(|label| html! { <th>{ *label }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for self.rows.iter().map(ResultRow::view) }
                </tbody>
            </table>
        }
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
