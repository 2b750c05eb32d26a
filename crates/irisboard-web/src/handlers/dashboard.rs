//! Dashboard handler — the single page with controls, chart and table.

use axum::{extract::State, response::Html};
use irisboard_data::Attribute;
use crate::config::UiConfig;
use crate::state::SharedState;

pub const PAGE_TITLE: &str = "Iris Clustering";

const DASHBOARD_JS: &str = include_str!("../../templates/dashboard.js");
const DASHBOARD_CSS: &str = include_str!("../../templates/style.css");

/// GET / — initial page; the script fires one clustering run on load.
pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    Html(render_dashboard(&state.config.ui))
}

fn attribute_options(selected: Attribute) -> String {
    Attribute::ALL
        .iter()
        .map(|attr| {
            let marker = if *attr == selected { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, attr.label(), marker)
        })
        .collect()
}

pub fn render_dashboard(ui: &UiConfig) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{css}</style>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
</head>
<body>
<main class="container">
    <div class="title">{title}</div>

    <div class="controls">
        <div>
            <label for="x-dropdown">x-axis</label>
            <select id="x-dropdown">{x_options}</select>
        </div>
        <div>
            <label for="y-dropdown">y-axis</label>
            <select id="y-dropdown">{y_options}</select>
        </div>
        <div>
            <label for="cluster-input">Number of clusters</label>
            <input id="cluster-input" type="number" value="{clusters}">
        </div>
        <div>
            <button id="apply-button" class="btn" type="button">Apply</button>
        </div>
    </div>

    <div id="error-box" class="alert" hidden></div>

    <div class="chart-wrap">
        <canvas id="cluster-chart"></canvas>
    </div>

    <div class="table-wrap" data-page-size="{page_size}">
        <table>
            <thead id="table-head"></thead>
            <tbody id="table-body"></tbody>
        </table>
    </div>
    <div class="pager">
        <button id="prev-page" class="btn" type="button">&laquo; Prev</button>
        <span id="page-label"></span>
        <button id="next-page" class="btn" type="button">Next &raquo;</button>
    </div>
</main>
<script>{js}</script>
</body>
</html>"#,
        title = PAGE_TITLE,
        css = DASHBOARD_CSS,
        x_options = attribute_options(ui.default_x),
        y_options = attribute_options(ui.default_y),
        clusters = ui.default_clusters,
        page_size = ui.page_size,
        js = DASHBOARD_JS,
    )
}
