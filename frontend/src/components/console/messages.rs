use common::model::config::AffiliateSettings;

use crate::flows::{CategoryCard, Panel};
use crate::table::ResultTable;

pub enum Msg {
    Search,
    ReportByCategory,
    Upload,
    SaveConfig,
    SetStatus(Panel, String),
    ClearOutput(Panel),
    ShowTable(ResultTable),
    ShowCategories(Vec<CategoryCard>),
    PopulateConfig(AffiliateSettings),
}
