use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

struct TeamMember {
    id: &'static str,
    name: &'static str,
    role: &'static str,
    description: &'static str,
    metric: &'static str,
    image: &'static str,
}

const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        id: "arsalan",
        name: "Arsalan Zaffar",
        role: "Growth Architect",
        description: "Built neuromarketing systems that generated $50M+ in client revenue. Former strategy consultant who cracked the psychology of viral growth.",
        metric: "15+ years in neuromarketing",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400",
    },
    TeamMember {
        id: "sharjeel",
        name: "Sharjeel Yunus",
        role: "Technical Visionary",
        description: "10,000+ hours building scalable React systems. Open-source contributor with 15K+ GitHub stars. Architect of solutions that handle millions of users.",
        metric: "15K+ GitHub stars",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400",
    },
    TeamMember {
        id: "farhan",
        name: "Farhan Ashraf",
        role: "Infrastructure Maestro",
        description: "DevOps specialist who's deployed systems for 100M+ user applications. Kubernetes expert who makes complex infrastructure invisible.",
        metric: "99.99% uptime track record",
        image: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400",
    },
    TeamMember {
        id: "anser",
        name: "Anser Waseem",
        role: "Experience Craftsman",
        description: "Product designer who's shipped 50+ applications with 95%+ user satisfaction. Master of converting user research into pixel-perfect experiences.",
        metric: "95%+ user satisfaction",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=400",
    },
];

// (id, title, description, technologies)
const SERVICES: &[(&str, &str, &str, &str)] = &[
    ("web-development", "Web Development", "React, Next.js solutions that load in under 1 second and scale to millions of users.", "React • Next.js • TypeScript"),
    ("mobile-development", "Mobile Development", "Cross-platform Flutter applications that feel native everywhere.", "Flutter • iOS • Android"),
    ("enterprise-solutions", "Enterprise Solutions", "Scalable business software deployed to 50,000+ employees.", "Microservices • Cloud • Security"),
    ("ai-automation", "AI & Automation", "Custom AI solutions and workflows that learn and optimize automatically.", "Machine Learning • AI • Automation"),
    ("customer-experience", "Customer Experience Optimization", "Neuroscience-based UX/UI that converts browsers into believers.", "Neuroscience • UX Research • Psychology"),
    ("launch-growth", "Launch & Growth Strategy", "From launch to first 1000 customers with proven growth methodologies.", "Growth Marketing • Strategy • Launch"),
];

const PHASES: &[(&str, &str, &str)] = &[
    ("intelligence", "Intelligence Phase", "Customer psychology research drives every technical decision"),
    ("integration", "Integration Phase", "Development and growth systems built simultaneously"),
    ("ignition", "Ignition Phase", "Launch with proven systems that scale to 1000+ customers"),
];

// (id, metric, description, category)
const CLIENT_RESULTS: &[(&str, &str, &str, &str)] = &[
    ("saas-growth", "0 to 10K", "Users in 90 days", "SaaS Platform"),
    ("conversion-improvement", "300%", "Conversion improvement", "E-commerce App"),
    ("enterprise-deployment", "50K+", "Employees deployed", "Enterprise Tool"),
    ("mobile-success", "4.9★", "100K+ downloads", "Mobile App"),
];

const AUTHORITY_METRICS: &[(&str, &str, &str)] = &[
    ("production-code", "500K+", "Lines of production code"),
    ("successful-launches", "50+", "Successful product launches"),
    ("client-retention", "95%", "Client retention rate"),
    ("value-generated", "$100M+", "Client value generated"),
];


#[function_component]
pub fn Hero() -> Html {
    html! {
        <section class="hero-section" id="hero">
            <style>
            {r#".hero-section {
                min-height: 100vh;
                display: flex;
                align-items: center;
                background-image: linear-gradient(rgba(255,255,255,0.85), rgba(255,255,255,0.95)), url('/images/hero-background.png');
                background-size: cover;
                background-position: center;
            }
            .hero-headline {
                font-family: 'Montserrat', sans-serif;
                font-size: 4.5rem;
                font-weight: 500;
                letter-spacing: -0.03em;
                margin: 1.5rem 0;
            }
            .hero-subheadline {
                max-width: 42rem;
                font-size: 1.25rem;
                color: #475569;
                margin-bottom: 2rem;
            }
            .hero-badges { display: flex; flex-direction: column; gap: 2rem; align-items: flex-start; }
            @media (max-width: 768px) {
                .hero-headline { font-size: 2.75rem; }
            }"#}
            </style>
            <div class="section-inner hero-badges">
                <span class="badge">{"Trusted by companies scaling to millions of users"}</span>
                <div>
                    <h1 class="hero-headline">{"Software that works"}</h1>
                    <p class="hero-subheadline">
                        {"The complete product team that Fortune 500s build internally - now accessible to ambitious companies. Elite developers + neuroscience researchers + growth experts working as one integrated force."}
                    </p>
                </div>
                <span class="badge">{"Currently accepting 8 new projects for Q4 2025"}</span>
                <Link<Route> to={Route::Contact} classes="cta-button">
                    {"Claim Your Strategy Session"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[function_component]
pub fn Problem() -> Html {
    html! {
        <section class="problem-section" id="problem">
            <div class="section-inner" style="max-width: 56rem;">
                <h2 class="section-headline">
                    <span class="muted">{"The impossible choice "}</span>
                    {"every ambitious founder faces"}
                </h2>
                <p style="font-size: 1.25rem; color: #475569; margin-bottom: 1.5rem;">
                    {"You know your product could change everything. But assembling a world-class team of senior developers, UX researchers, and growth experts would cost $2M+ annually. Most founders compromise. Choose building OR scaling. Watch brilliant products die in obscurity."}
                </p>
                <p style="font-size: 1.125rem; font-style: italic; color: #64748b; margin-bottom: 2rem;">
                    {"We've seen this story too many times. It's why we exist."}
                </p>
                <div class="card">
                    <strong>{"73% of product launches fail due to poor go-to-market strategy"}</strong>
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Team() -> Html {
    html! {
        <section class="team-section" id="team" style="background: #f8fafc;">
            <div class="section-inner">
                <h2 class="section-headline">
                    {"Meet the team most companies"}<br />
                    <span class="accent">{"can't afford to hire"}</span>
                </h2>
                <div class="card-grid">
                    { for TEAM_MEMBERS.iter().map(|member| html! {
                        <div class="card" key={member.id}>
                            <img
                                src={member.image}
                                alt={format!("{} - {}", member.name, member.role)}
                                loading="lazy"
                                style="width: 6rem; height: 6rem; border-radius: 50%; object-fit: cover; margin-bottom: 1rem;"
                            />
                            <h3 style="margin: 0;">{member.name}</h3>
                            <h4 style="margin: 0.25rem 0 1rem; color: #3b82f6; font-weight: 500;">{member.role}</h4>
                            <p style="color: #475569;">{member.description}</p>
                            <span class="badge">{member.metric}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Services() -> Html {
    html! {
        <section class="services-section" id="services">
            <div class="section-inner">
                <h2 class="section-headline">
                    {"The only team that combines"}<br />
                    <span class="accent">{"code, psychology and growth"}</span>
                </h2>
                <p style="font-size: 1.25rem; color: #475569; margin-bottom: 3rem;">
                    {"One integrated team delivering complete product solutions - from brilliant code to beautiful scale"}
                </p>
                <div class="card-grid">
                    { for SERVICES.iter().map(|(id, title, description, technologies)| html! {
                        <div class="card" key={*id}>
                            <h3>{*title}</h3>
                            <p style="color: #475569;">{*description}</p>
                            <p style="color: #94a3b8; font-size: 0.875rem;">{*technologies}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Methodology() -> Html {
    html! {
        <section class="methodology-section" id="methodology" style="background: #0f172a; color: white;">
            <div class="section-inner">
                <h2 class="section-headline">{"The Integrated Excellence Method"}</h2>
                <p style="font-size: 1.25rem; color: #cbd5e1; max-width: 48rem; margin-bottom: 3rem;">
                    {"Our proprietary methodology combines development, neuroscience, and growth marketing from day one. No handoffs. No misalignment. No products that work perfectly but nobody wants."}
                </p>
                <div class="card-grid">
                    { for PHASES.iter().enumerate().map(|(index, (id, title, description))| html! {
                        <div class="card" key={*id} style="background: #1e293b; border-color: #334155;">
                            <span class="badge" style="color: #cbd5e1; border-color: #334155;">{format!("0{}", index + 1)}</span>
                            <h3>{*title}</h3>
                            <p style="color: #cbd5e1;">{*description}</p>
                        </div>
                    }) }
                </div>
                <div style="margin-top: 3rem;">
                    <Link<Route> to={Route::Contact} classes="cta-button" >
                        {"Download Our Complete Methodology"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Results() -> Html {
    html! {
        <section class="results-section" id="results">
            <div class="section-inner">
                <h2 class="section-headline">
                    {"Results that speak louder"}<br />
                    <span class="muted">{"than promises"}</span>
                </h2>
                <div class="card-grid">
                    { for CLIENT_RESULTS.iter().map(|(id, metric, description, category)| html! {
                        <div class="card" key={*id}>
                            <div style="font-size: 2.5rem; font-weight: 600;">{*metric}</div>
                            <div style="color: #475569;">{*description}</div>
                            <div style="color: #94a3b8; font-size: 0.875rem; margin-top: 0.5rem;">{*category}</div>
                        </div>
                    }) }
                </div>
                <div class="card-grid" style="margin-top: 3rem; text-align: center;">
                    { for AUTHORITY_METRICS.iter().map(|(id, metric, description)| html! {
                        <div key={*id}>
                            <div style="font-size: 2rem; font-weight: 600; color: #3b82f6;">{*metric}</div>
                            <div style="color: #475569;">{*description}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component]
pub fn Vision() -> Html {
    html! {
        <section class="vision-section" id="vision" style="background: #f8fafc;">
            <div class="section-inner" style="max-width: 56rem;">
                <h2 class="section-headline">
                    {"The future of "}
                    <span class="accent">{"product development"}</span>
                </h2>
                <p style="font-size: 1.25rem; color: #475569;">
                    {"Imagine a world where every great idea gets both brilliant execution and beautiful growth. Where technical excellence and market success aren't separate battles. Where the best products win because they're built right AND launched right."}
                </p>
                <p style="font-size: 1.25rem; font-weight: 500;">
                    {"That's the future we're creating. One integrated team at a time."}
                </p>
                <p style="color: #475569; margin-bottom: 2rem;">
                    {"When you work with Envobit, you're not just hiring developers. You're joining a movement that's redefining how breakthrough products are brought to life."}
                </p>
                <Link<Route> to={Route::Contact} classes="cta-button">
                    {"Join the Movement"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[function_component]
pub fn FinalCta() -> Html {
    html! {
        <section class="final-cta-section" id="final-cta">
            <div class="section-inner" style="max-width: 56rem; text-align: center;">
                <h2 class="section-headline">
                    {"Ready to join the companies"}<br />
                    <span class="accent">{"building the future?"}</span>
                </h2>
                <p style="font-size: 1.25rem; color: #475569; margin-bottom: 2rem;">
                    {"We're selective about our partnerships. We only work with companies that share our vision for integrated excellence. The question isn't whether we can transform your product. The question is whether you're ready for transformation."}
                </p>
                <p><span class="badge">{"8 partnership slots remaining for 2025"}</span></p>
                <div style="display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; margin: 2rem 0;">
                    <Link<Route> to={Route::Contact} classes="cta-button">
                        {"Apply for Partnership"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="cta-button outline">
                        {"Get Free Product Strategy Audit"}
                    </Link<Route>>
                </div>
                <Link<Route> to={Route::Contact} classes="see-if-qualify">
                    {"See If You Qualify"}
                </Link<Route>>
            </div>
        </section>
    }
}
