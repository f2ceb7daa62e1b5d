//! Mappings table component

use leptos::prelude::*;
use shared::table::TABLE_COLUMNS;
use shared::{MappingRow, TableBody};

fn mapping_row(row: MappingRow) -> impl IntoView {
    let href = row.original_url.clone();
    view! {
        <tr>
            <td>{row.short_url}</td>
            <td>
                <a href=href target="_blank" rel="noopener noreferrer">{row.original_url}</a>
            </td>
            <td>{row.visits}</td>
            <td>{row.device}</td>
            <td>{row.os}</td>
        </tr>
    }
}

#[component]
pub fn MappingsTable(#[prop(into)] body: Signal<TableBody>) -> impl IntoView {
    view! {
        <table id="mappingsTable">
            <thead>
                <tr>
                    <th>"Short URL"</th>
                    <th>"Original URL"</th>
                    <th>"Visits"</th>
                    <th>"Device"</th>
                    <th>"OS"</th>
                </tr>
            </thead>
            <tbody>
                {move || match body.get() {
                    TableBody::Rows(rows) => rows.into_iter().map(mapping_row).collect_view().into_any(),
                    TableBody::Placeholder(message) => view! {
                        <tr>
                            <td colspan=TABLE_COLUMNS.to_string()>{message}</td>
                        </tr>
                    }
                    .into_any(),
                }}
            </tbody>
        </table>
    }
}
