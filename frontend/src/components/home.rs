//! 首页
//!
//! 主视觉区、聊天助手、特色内容卡片与页脚。

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::navbar::Navbar;

struct FeatureCard {
    title: &'static str,
    body: &'static str,
}

static FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "Effective Workouts",
        body: "Discover our curated workout plans for all fitness levels, designed to help you achieve your goals efficiently.",
    },
    FeatureCard {
        title: "Balanced Nutrition",
        body: "Learn about proper nutrition to fuel your fitness journey and optimize your health and performance.",
    },
    FeatureCard {
        title: "Quality Sleep",
        body: "Understand the importance of sleep in your fitness routine and learn techniques for better rest and recovery.",
    },
    FeatureCard {
        title: "Remarkable Achievements",
        body: "Celebrate your fitness milestones and get inspired by others' success stories.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />

            <main class="container mx-auto mt-8 px-4 space-y-12">
                <section class="hero rounded-lg bg-neutral text-neutral-content py-20">
                    <div class="hero-content text-center">
                        <div class="max-w-4xl">
                            <h1 class="text-6xl font-bold mb-6 leading-tight">
                                "Transform Your Life with DREAMS Fitness"
                            </h1>
                            <p class="text-2xl mb-8">
                                "Your journey to a healthier, stronger, and more confident you starts here."
                            </p>
                            <div class="flex flex-col sm:flex-row justify-center gap-4">
                                <a href="#" class="btn btn-primary btn-lg rounded-full">
                                    "Start Your Journey"
                                </a>
                                <a href="#" class="btn btn-outline btn-lg rounded-full">
                                    "Learn More"
                                </a>
                            </div>
                        </div>
                    </div>
                </section>

                <section>
                    <ChatPanel />
                </section>

                <section>
                    <h2 class="text-3xl font-semibold mb-6 text-center">"Featured Content"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        {FEATURES
                            .iter()
                            .map(|f| {
                                view! {
                                    <div class="card bg-base-100 shadow-lg hover:scale-105 transition duration-300">
                                        <div class="card-body">
                                            <h3 class="card-title text-2xl">{f.title}</h3>
                                            <p class="text-base-content/70">{f.body}</p>
                                            <a href="#" class="link link-primary font-semibold">
                                                "Learn More →"
                                            </a>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </main>

            <footer class="footer footer-center bg-base-100 text-base-content p-10 mt-12">
                <aside>
                    <h3 class="text-3xl font-bold">"DREAMS Fitness"</h3>
                    <p class="text-base-content/60">"Dreams don't work unless you do"</p>
                    <p class="text-base-content/40">"© 2024 DREAMS Fitness. All rights reserved."</p>
                </aside>
            </footer>
        </div>
    }
}
