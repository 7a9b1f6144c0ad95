use dioxus::prelude::*;
use services::portfolio::{AlgorithmsPage, Selection};

#[component]
pub fn AlgorithmsView(page: AlgorithmsPage, selection: Signal<Selection>) -> Element {
    let sizes: Vec<u32> = (1..=page.max_size).collect();
    rsx! {
        div { class: "page algorithms-page",
            h2 { class: "view-title", "🧮 Algorithms" }
            section { class: "algo",
                h3 { "Pascal's Triangle" }
                label { class: "field",
                    span { class: "field-label", "Rows" }
                    select {
                        class: "input",
                        value: "{page.pascal_rows}",
                        onchange: move |evt: FormEvent| {
                            if let Ok(rows) = evt.value().parse::<u32>() {
                                let mut selection = selection;
                                selection.write().set_pascal_rows(rows);
                            }
                        },
                        for size in sizes.iter().copied() {
                            option { value: "{size}", selected: size == page.pascal_rows, "{size}" }
                        }
                    }
                }
                div { class: "pascal",
                    for row in page.pascal.iter() {
                        div { class: "pascal-row",
                            for value in row.iter() {
                                span { class: "pascal-cell", "{value}" }
                            }
                        }
                    }
                }
            }
            section { class: "algo",
                h3 { "Multiplication Table" }
                label { class: "field",
                    span { class: "field-label", "Size" }
                    select {
                        class: "input",
                        value: "{page.table_size}",
                        onchange: move |evt: FormEvent| {
                            if let Ok(size) = evt.value().parse::<u32>() {
                                let mut selection = selection;
                                selection.write().set_table_size(size);
                            }
                        },
                        for size in sizes.iter().copied() {
                            option { value: "{size}", selected: size == page.table_size, "{size}" }
                        }
                    }
                }
                table { class: "times-table",
                    tbody {
                        for row in page.table.iter() {
                            tr {
                                for value in row.iter() {
                                    td { "{value}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
