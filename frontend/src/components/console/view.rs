//! View rendering for the admin console.
//!
//! Four panels in a two-column grid: keyword search, per-category report,
//! commission CSV upload, and affiliate configuration. Each panel ends with
//! its status line; the search and report panels also show their output.
//! All user-facing text is Thai.

use common::requests::SortKey;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AdminConsole;
use crate::flows::{CategoryCard, Panel, TopSummary};
use crate::format::PLACEHOLDER;
use crate::panel_grid::PanelGrid;

pub fn view(component: &AdminConsole, ctx: &Context<AdminConsole>) -> Html {
    let link = ctx.link();

    html! {
        <PanelGrid columns={2}>
            { build_search_panel(component, link) }
            { build_category_panel(component, link) }
            { build_upload_panel(component, link) }
            { build_config_panel(component, link) }
        </PanelGrid>
    }
}

fn build_search_panel(component: &AdminConsole, link: &Scope<AdminConsole>) -> Html {
    let inputs = &component.search;
    html! {
        <section class="panel">
            <h2>{"ค้นหาสินค้า"}</h2>
            <div class="row">
                <label>{"คำค้น"}<input type="text" ref={inputs.keyword.clone()} placeholder="เช่น หูฟังบลูทูธ" /></label>
                <label>{"จำนวน"}<input type="number" min="1" ref={inputs.limit.clone()} /></label>
                <label>{"เรตติ้งขั้นต่ำ"}<input type="number" step="0.1" min="0" max="5" ref={inputs.min_rating.clone()} /></label>
                <label>{"ยอดขายขั้นต่ำ"}<input type="number" min="0" ref={inputs.min_sold.clone()} /></label>
                <label>
                    {"เรียงตาม"}
                    <select ref={inputs.sort.clone()}>
                        <option value={SortKey::Sold.as_str()}>{"ยอดขาย"}</option>
                        <option value={SortKey::Score.as_str()}>{"คะแนน (คอมฯ × ยอดขาย)"}</option>
                    </select>
                </label>
                <button onclick={link.callback(|_| Msg::Search)}>{"ค้นหา"}</button>
            </div>
            { status_line(component, Panel::Search) }
            <div class="table-wrap">
                if let Some(table) = &component.search_table {
                    { table.view() }
                }
            </div>
        </section>
    }
}

fn build_category_panel(component: &AdminConsole, link: &Scope<AdminConsole>) -> Html {
    let inputs = &component.category;
    html! {
        <section class="panel">
            <h2>{"สินค้าขายดีต่อหมวด"}</h2>
            <div class="row">
                <label>{"จำนวนต่อหมวด"}<input type="number" min="1" ref={inputs.limit_per_cat.clone()} /></label>
                <label>{"เรตติ้งขั้นต่ำ"}<input type="number" step="0.1" min="0" max="5" ref={inputs.min_rating.clone()} /></label>
                <label>{"ยอดขายขั้นต่ำ"}<input type="number" min="0" ref={inputs.min_sold.clone()} /></label>
                <label class="check"><input type="checkbox" ref={inputs.use_score.clone()} />{"จัดอันดับด้วยคะแนน"}</label>
                <button onclick={link.callback(|_| Msg::ReportByCategory)}>{"ดึงต่อหมวด"}</button>
            </div>
            { status_line(component, Panel::Category) }
            <div class="cat-results">
                { for component.category_cards.iter().map(category_card) }
            </div>
        </section>
    }
}

fn category_card(card: &CategoryCard) -> Html {
    html! {
        <div class="cat-card">
            <h3>{ card.label.clone() }{" "}<span class="badge">{ card.badge() }</span></h3>
            {
                match &card.top {
                    Some(top) => top_summary(top),
                    None => html! { <p>{"ไม่พบสินค้า"}</p> },
                }
            }
            <details>
                <summary>{"ดูทั้งหมด"}</summary>
                { card.table.view() }
            </details>
        </div>
    }
}

fn top_summary(top: &TopSummary) -> Html {
    html! {
        <p>
            <b>{"อันดับ 1:"}</b>
            { format!(" {} — ยอดขาย {} — คอมฯ {} — ", top.name, top.sold, top.commission) }
            {
                match &top.url {
                    Some(url) => html! {
                        <a href={url.clone()} target="_blank" rel="noopener">{"เปิดลิงก์"}</a>
                    },
                    None => html! { <>{ PLACEHOLDER }</> },
                }
            }
        </p>
    }
}

fn build_upload_panel(component: &AdminConsole, link: &Scope<AdminConsole>) -> Html {
    html! {
        <section class="panel">
            <h2>{"อัปโหลดค่าคอมมิชชัน (CSV)"}</h2>
            <p class="hint">{"คอลัมน์ที่ต้องมี: itemid, commission_rate"}</p>
            <div class="row">
                <input type="file" accept=".csv,text/csv" ref={component.csv_file.clone()} />
                <button onclick={link.callback(|_| Msg::Upload)}>{"อัปโหลด"}</button>
            </div>
            { status_line(component, Panel::Upload) }
        </section>
    }
}

fn build_config_panel(component: &AdminConsole, link: &Scope<AdminConsole>) -> Html {
    let inputs = &component.config;
    html! {
        <section class="panel">
            <h2>{"ตั้งค่า Affiliate API"}</h2>
            <div class="form">
                <label>{"Endpoint"}<input type="url" ref={inputs.endpoint.clone()} /></label>
                <label>{"App ID"}<input type="text" ref={inputs.app_id.clone()} /></label>
                <label>{"Secret"}<input type="password" ref={inputs.secret.clone()} /></label>
                <label class="check"><input type="checkbox" ref={inputs.enabled.clone()} />{"เปิดใช้งาน"}</label>
                <button onclick={link.callback(|_| Msg::SaveConfig)}>{"บันทึก"}</button>
            </div>
            { status_line(component, Panel::Config) }
        </section>
    }
}

fn status_line(component: &AdminConsole, panel: Panel) -> Html {
    html! {
        <div class="status">{ component.status(panel).to_string() }</div>
    }
}
