//! File Explorer page

use std::collections::HashSet;

use leptos::prelude::*;

use crate::format::format_date;
use crate::icon::{Icon, IconGlyph};
use crate::mock_data;
use crate::models::NodeKind;
use crate::tree::{flatten_visible, indent_rem, toggle_expanded};

#[component]
pub fn FileExplorerPage() -> impl IntoView {
    let roots = StoredValue::new(mock_data::file_tree());
    let expanded = RwSignal::new(HashSet::<String>::new());

    let rows = move || expanded.with(|open| roots.with_value(|nodes| flatten_visible(nodes, open)));

    view! {
        <div class="page-header">
            <div>
                <h1>"File Explorer"</h1>
                <p class="muted">"Browse and manage your documents and folders"</p>
            </div>
            <button type="button" class="btn primary" on:click=|_| tracing::info!("new folder requested")>
                <IconGlyph icon=Icon::Folder />
                "New Folder"
            </button>
        </div>

        <section class="card file-explorer">
            <div class="file-row file-header">
                <span>"Name"</span>
                <span>"Size"</span>
                <span>"Modified"</span>
            </div>
            <For
                each=rows
                key=|(node, depth)| (node.id, *depth)
                children=move |(node, depth)| {
                    let id = node.id;
                    let is_folder = node.kind == NodeKind::Folder;
                    let is_open = move || expanded.with(|open| open.contains(id));
                    view! {
                        <div
                            class="file-row"
                            class:folder=is_folder
                            style=format!("padding-left: {}rem", indent_rem(depth))
                            on:click=move |_| {
                                if is_folder {
                                    expanded.update(|open| toggle_expanded(open, id));
                                }
                            }
                        >
                            <span class="file-name">
                                {is_folder.then(|| view! {
                                    <span class="chevron" class:open=is_open>
                                        <IconGlyph icon=Icon::ChevronRight />
                                    </span>
                                })}
                                <IconGlyph icon=if is_folder { Icon::Folder } else { Icon::FileText } />
                                {node.name}
                            </span>
                            <span class="muted">{node.size.unwrap_or("")}</span>
                            <span class="muted">{format_date(node.modified)}</span>
                        </div>
                    }
                }
            />
        </section>
    }
}
