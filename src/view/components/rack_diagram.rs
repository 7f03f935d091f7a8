use dioxus::prelude::*;

use crate::model::rack::{RackDto, RackSlotDto};

/// Front view of a rack, top unit first.
///
/// Equipment is drawn once with a row span equal to its height; free units get a row each.
#[component]
pub fn RackDiagram(rack: RackDto) -> Element {
    rsx!(
        table { class: "rack-diagram",
            tbody {
                for slot in rack.layout.iter() {
                    {match slot {
                        RackSlotDto::Equipment { top_u, equipment } => rsx! {
                            tr { class: "slot slot-used",
                                th { class: "unit", "U{top_u}" }
                                td {
                                    class: "equipment",
                                    rowspan: "{equipment.u_height}",
                                    a { href: "/equipment/{equipment.id}", "{equipment.name}" }
                                    span { class: "muted", " {equipment.kind}" }
                                }
                            }
                            for u in (equipment.u_position..*top_u).rev() {
                                tr { class: "slot slot-used",
                                    th { class: "unit", "U{u}" }
                                }
                            }
                        },
                        RackSlotDto::Empty { u } => rsx! {
                            tr { class: "slot slot-empty",
                                th { class: "unit", "U{u}" }
                                td { class: "empty" }
                            }
                        },
                    }}
                }
            }
        }
    )
}
