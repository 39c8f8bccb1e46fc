use dioxus::prelude::*;

use dialog_overlay::{Dialog, PanelSize};

fn main() {
    dioxus::launch(App);
}

#[allow(non_snake_case)]
fn App() -> Element {
    let mut show_confirm = use_signal(|| false);
    let mut show_notice = use_signal(|| false);
    let mut confirmed = use_signal(|| false);

    rsx! {
        div { id: "main",
            div { class: "content-header",
                h1 { "DIALOG OVERLAY DEMO" }
            }
            div { class: "demo-actions",
                button { onclick: move |_| show_confirm.set(true), "OPEN CONFIRM" }
                button { onclick: move |_| show_notice.set(true), "OPEN NOTICE" }
            }
            if confirmed() {
                div { class: "demo-result", "CONFIRMED" }
            }

            Dialog {
                open: show_confirm(),
                title: "CONFIRM".to_string(),
                size: PanelSize::Small,
                on_dismiss: move |_| show_confirm.set(false),
                footer: rsx! {
                    button {
                        onclick: move |_| {
                            confirmed.set(true);
                            show_confirm.set(false);
                        },
                        "CONFIRM"
                    }
                    button { onclick: move |_| show_confirm.set(false), "CANCEL" }
                },
                p { "Apply the change?" }
            }

            Dialog {
                open: show_notice(),
                title: "NOTICE".to_string(),
                size: PanelSize::Large,
                dismiss_on_backdrop: false,
                on_dismiss: move |_| show_notice.set(false),
                p { "This notice closes from the close control or the escape key only." }
            }
        }
    }
}
