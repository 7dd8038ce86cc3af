//! Root application component with the shared state contexts.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::chat_widget::ChatWidget;
use crate::state::{chat::ChatState, session::SessionState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: provides the chat state contexts and hosts the floating
/// support widget. The banking pages themselves are served elsewhere.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let chat = RwSignal::new(ChatState::default());
    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(chat);
    provide_context(session);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/support-chat.css"/>
        <Title text="Customer Service"/>

        <main class="support-page">
            <h1>"Customer Service"</h1>
            <p>"Questions about your account? Start a conversation below."</p>
        </main>

        <ChatWidget/>
    }
}
