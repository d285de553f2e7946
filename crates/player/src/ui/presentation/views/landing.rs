//! The landing page: hero, features, courses and the enrollment form

use dioxus::prelude::*;
use landing_domain::effects::CardKind;

use crate::ui::presentation::components::common::{HoverCard, LazyImage, SlideUp};
use crate::ui::presentation::components::enrollment::EnrollmentFormView;
use crate::ui::presentation::components::hero::HeroSection;
use crate::ui::presentation::components::layout::{AnchorSection, NavBar, ScrollProgress};

struct Feature {
    title: &'static str,
    body: &'static str,
}

struct Course {
    title: &'static str,
    duration: &'static str,
    image: &'static str,
    summary: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Industry Mentors",
        body: "Learn from engineers and analysts who work in the field every day.",
    },
    Feature {
        title: "Flexible Schedule",
        body: "Evening and weekend cohorts that fit around work and family.",
    },
    Feature {
        title: "Career Support",
        body: "CV reviews, mock interviews and introductions to hiring partners.",
    },
    Feature {
        title: "Recognised Certificates",
        body: "Finish with a portfolio and a certificate employers ask for.",
    },
];

const COURSES: &[Course] = &[
    Course {
        title: "Web Development",
        duration: "16 weeks",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=600",
        summary: "HTML, CSS, JavaScript and a modern framework, ending with a deployed project.",
    },
    Course {
        title: "Data Analytics",
        duration: "12 weeks",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600",
        summary: "Spreadsheets, SQL and dashboards for decisions backed by data.",
    },
    Course {
        title: "Digital Marketing",
        duration: "10 weeks",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600",
        summary: "Search, social and analytics campaigns run on real budgets.",
    },
    Course {
        title: "Cloud Computing",
        duration: "14 weeks",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=600",
        summary: "Deploy, scale and monitor services on the major cloud platforms.",
    },
    Course {
        title: "Cyber Security",
        duration: "14 weeks",
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=600",
        summary: "Threat modelling, network defence and incident response.",
    },
];

#[component]
pub fn LandingView() -> Element {
    rsx! {
        ScrollProgress {}
        NavBar {}
        main {
            HeroSection {}

            AnchorSection { id: "features", class: "features",
                div { class: "container",
                    SlideUp {
                        h2 { class: "section-title", "Why Learn With Us" }
                    }
                    div { class: "features-grid",
                        for (index, feature) in FEATURES.iter().enumerate() {
                            HoverCard { key: "{index}", kind: CardKind::Feature, index,
                                h3 { {feature.title} }
                                p { {feature.body} }
                            }
                        }
                    }
                }
            }

            AnchorSection { id: "courses", class: "courses",
                div { class: "container",
                    SlideUp {
                        h2 { class: "section-title", "Our Courses" }
                    }
                    div { class: "courses-grid",
                        for (index, course) in COURSES.iter().enumerate() {
                            HoverCard { key: "{index}", kind: CardKind::Course, index,
                                LazyImage { src: course.image, alt: course.title, class: "course-image" }
                                div { class: "course-body",
                                    h3 { {course.title} }
                                    span { class: "course-duration", {course.duration} }
                                    p { {course.summary} }
                                }
                            }
                        }
                    }
                }
            }

            AnchorSection { id: "enroll", class: "enrollment",
                div { class: "container",
                    SlideUp {
                        h2 { class: "section-title", "Start Your Journey" }
                        p { class: "section-subtitle",
                            "Tell us a little about yourself and an advisor will be in touch."
                        }
                    }
                    EnrollmentFormView {}
                }
            }
        }
        footer { class: "footer",
            div { class: "container",
                p { "© SkillBridge Academy. All rights reserved." }
            }
        }
    }
}
