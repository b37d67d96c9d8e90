use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub is_loading: bool,
    pub children: Children,
}

/// Covers the page until `is_loading` turns false. Children mount right away
/// so their effects run underneath the overlay.
#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    html! {
        <>
            if props.is_loading {
                <div class="loading-overlay" aria-busy="true">
                    <img src="/assets/21goals-icon-white.png" alt="21Goals Logo" class="loading-logo" />
                    <span class="loading-spinner"></span>
                </div>
            }
            { for props.children.iter() }
            <style>
                {r#"
                .loading-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    background: #052e16;
                }
                .loading-logo {
                    width: 12rem;
                    height: auto;
                }
                .loading-spinner {
                    width: 32px;
                    height: 32px;
                    border: 3px solid rgba(255, 255, 255, 0.3);
                    border-top-color: #FFD93B;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                "#}
            </style>
        </>
    }
}
