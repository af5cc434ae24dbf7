use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
            {r#".site-footer {
                background: white;
                border-top: 1px solid #e5e7eb;
                padding: 3rem 1.5rem 1rem;
            }
            .footer-content {
                max-width: 80rem;
                margin: 0 auto;
                display: flex;
                justify-content: space-between;
                align-items: center;
                flex-wrap: wrap;
                gap: 1rem;
            }
            .footer-brand h2 {
                font-family: 'Montserrat', sans-serif;
                font-size: 1.5rem;
                font-weight: 600;
                margin: 0;
            }
            .footer-brand p { color: #475569; margin-top: 0.5rem; }
            .footer-links { display: flex; gap: 1.5rem; }
            .footer-links a { color: #475569; text-decoration: none; }
            .footer-links a:hover { color: #3b82f6; }
            .footer-legal {
                max-width: 80rem;
                margin: 2rem auto 0;
                padding-top: 2rem;
                border-top: 1px solid #e5e7eb;
                text-align: center;
                color: #64748b;
                font-size: 0.875rem;
            }"#}
            </style>
            <div class="footer-content">
                <div class="footer-brand">
                    <h2>{"Envobit"}</h2>
                    <p>{"From brilliant code to beautiful scale"}</p>
                </div>
                <div class="footer-links">
                    <a href="https://www.linkedin.com/company/envobit/" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    <a href="https://www.instagram.com/envobit/" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    <a href="https://github.com/envobit" target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                </div>
            </div>
            <div class="footer-legal">
                {"© 2025 Envobit. All rights reserved."}
            </div>
        </footer>
    }
}
