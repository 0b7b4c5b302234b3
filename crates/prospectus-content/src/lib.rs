// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use prospectus_app::{
    Accent, Catalog, Contact, Feature, FooterLink, Hero, Outcome, PricingTier, ProcessStep,
    Project, ProjectKey, SectionCopy, Service, ServiceCategory, ServiceKey, ShipDate, SiteContent,
    Testimonial, Tool, UseCase,
};
use time::Month;

const STUDIO: &str = "TechForge";

const HERO: Hero = Hero {
    title: "AI Driven Application Development",
    subtitle: "Tailored to Your Business Needs",
    tagline: "Accelerating digital transformation with smart technology and streamlined development 💡",
    primary_cta: "Get Started 🚀",
    secondary_cta: "Book a Call 📞",
};

const SERVICES_COPY: SectionCopy = SectionCopy {
    heading: "Our Advanced Solutions ✨",
    tagline: "Comprehensive suite of AI-powered services to transform your business 🚀",
};

const PROCESS_COPY: SectionCopy = SectionCopy {
    heading: "Simple & Efficient Process 🎯",
    tagline: "",
};

const TOOLS_COPY: SectionCopy = SectionCopy {
    heading: "Our Toolkit 🧰",
    tagline: "AI-powered solutions. Lightning-fast delivery. 🚀",
};

const WORK_COPY: SectionCopy = SectionCopy {
    heading: "Our Amazing Work 🎨",
    tagline: "Transforming businesses with cutting-edge technology solutions 🚀",
};

const SERVICES: [Service; 6] = [
    Service {
        key: ServiceKey::new("crm"),
        title: "Custom CRM",
        category: ServiceCategory::Business,
        icon: "📊",
        blurb: "Streamline your workflow with a custom CRM tailored to your business—boost efficiency, improve customer relationships, and drive growth.",
        accent: Accent::new((0x0D, 0x34, 0x30), (0x1A, 0xBC, 0x9C)),
        features: &[
            "Contact Management",
            "Sales Pipeline",
            "Analytics Dashboard",
            "Email Integration",
        ],
        detailed_features: &[
            Feature {
                icon: "👥",
                title: "Contact Management",
                desc: "Centralized database with 360° customer view",
            },
            Feature {
                icon: "📈",
                title: "Sales Pipeline",
                desc: "Visual pipeline with drag-and-drop stages",
            },
            Feature {
                icon: "📊",
                title: "Analytics",
                desc: "Real-time dashboards and custom reports",
            },
            Feature {
                icon: "📧",
                title: "Email Integration",
                desc: "Sync with Gmail, Outlook, and more",
            },
            Feature {
                icon: "📱",
                title: "Mobile App",
                desc: "iOS and Android native applications",
            },
            Feature {
                icon: "🔔",
                title: "Notifications",
                desc: "Smart alerts and reminders",
            },
        ],
        tech_stack: &["React", "Node.js", "PostgreSQL", "Redis", "AWS", "TypeScript"],
        pricing: &[
            PricingTier {
                name: "Starter",
                price: "$499",
                period: "/month",
                popular: false,
                features: &[
                    "Up to 1,000 contacts",
                    "3 users",
                    "Basic analytics",
                    "Email support",
                ],
            },
            PricingTier {
                name: "Professional",
                price: "$999",
                period: "/month",
                popular: true,
                features: &[
                    "Up to 10,000 contacts",
                    "10 users",
                    "Advanced analytics",
                    "Priority support",
                    "Custom fields",
                    "API access",
                ],
            },
            PricingTier {
                name: "Enterprise",
                price: "Custom",
                period: "",
                popular: false,
                features: &[
                    "Unlimited contacts",
                    "Unlimited users",
                    "White-label",
                    "Dedicated support",
                    "SLA",
                    "On-premise option",
                ],
            },
        ],
        use_cases: &[
            UseCase {
                icon: "🏢",
                title: "B2B Sales Teams",
                desc: "Manage complex sales cycles and enterprise deals",
            },
            UseCase {
                icon: "🏪",
                title: "Retail Businesses",
                desc: "Track customer preferences and purchase history",
            },
            UseCase {
                icon: "💼",
                title: "Consulting Firms",
                desc: "Manage client relationships and projects",
            },
            UseCase {
                icon: "🏥",
                title: "Healthcare",
                desc: "HIPAA-compliant patient relationship management",
            },
        ],
    },
    Service {
        key: ServiceKey::new("internal-tools"),
        title: "Internal Tools",
        category: ServiceCategory::Productivity,
        icon: "🛠️",
        blurb: "Empower your team with custom AI-driven internal tools that automate workflows, enhance collaboration, and boost productivity.",
        accent: Accent::new((0x16, 0xA0, 0x85), (0xE8, 0xA5, 0x4B)),
        features: &[
            "Workflow Automation",
            "Team Collaboration",
            "Custom Dashboards",
            "API Integration",
        ],
        detailed_features: &[
            Feature {
                icon: "⚡",
                title: "Workflow Automation",
                desc: "Automate repetitive tasks with AI",
            },
            Feature {
                icon: "👥",
                title: "Team Collaboration",
                desc: "Real-time collaboration tools",
            },
            Feature {
                icon: "📊",
                title: "Custom Dashboards",
                desc: "Build dashboards without coding",
            },
            Feature {
                icon: "🔗",
                title: "API Integration",
                desc: "Connect to 1000+ apps",
            },
            Feature {
                icon: "🤖",
                title: "AI Assistant",
                desc: "Built-in AI for data analysis",
            },
            Feature {
                icon: "🔒",
                title: "Security",
                desc: "Enterprise-grade security",
            },
        ],
        tech_stack: &["React", "Python", "FastAPI", "MongoDB", "Docker", "Kubernetes"],
        pricing: &[
            PricingTier {
                name: "Team",
                price: "$299",
                period: "/month",
                popular: false,
                features: &[
                    "Up to 5 tools",
                    "10 users",
                    "Basic integrations",
                    "Email support",
                ],
            },
            PricingTier {
                name: "Business",
                price: "$799",
                period: "/month",
                popular: true,
                features: &[
                    "Unlimited tools",
                    "50 users",
                    "Advanced integrations",
                    "Priority support",
                    "Custom branding",
                ],
            },
            PricingTier {
                name: "Enterprise",
                price: "Custom",
                period: "",
                popular: false,
                features: &[
                    "Unlimited everything",
                    "SSO",
                    "Dedicated support",
                    "SLA",
                    "On-premise deployment",
                ],
            },
        ],
        use_cases: &[
            UseCase {
                icon: "📝",
                title: "HR Operations",
                desc: "Manage hiring, onboarding, and performance reviews",
            },
            UseCase {
                icon: "💰",
                title: "Finance Teams",
                desc: "Expense tracking and budget management",
            },
            UseCase {
                icon: "🎯",
                title: "Marketing",
                desc: "Campaign management and lead tracking",
            },
            UseCase {
                icon: "🔧",
                title: "IT Operations",
                desc: "Asset management and ticket systems",
            },
        ],
    },
    Service {
        key: ServiceKey::new("ecommerce"),
        title: "E-commerce Platform",
        category: ServiceCategory::Commerce,
        icon: "🛒",
        blurb: "Launch, manage, and scale your online store effortlessly with powerful and customizable e-commerce solutions.",
        accent: Accent::new((0x1A, 0xBC, 0x9C), (0xD4, 0xAF, 0x37)),
        features: &[
            "Product Management",
            "Payment Processing",
            "Inventory Tracking",
            "Order Fulfillment",
        ],
        detailed_features: &[
            Feature {
                icon: "📦",
                title: "Product Management",
                desc: "Unlimited products with variants",
            },
            Feature {
                icon: "💳",
                title: "Payment Processing",
                desc: "Multiple payment gateways",
            },
            Feature {
                icon: "📊",
                title: "Inventory Tracking",
                desc: "Real-time stock management",
            },
            Feature {
                icon: "🚚",
                title: "Order Fulfillment",
                desc: "Integrated shipping solutions",
            },
            Feature {
                icon: "🎨",
                title: "Customizable Storefront",
                desc: "Drag-and-drop page builder",
            },
            Feature {
                icon: "📱",
                title: "Mobile Commerce",
                desc: "Native mobile apps",
            },
        ],
        tech_stack: &["Next.js", "Medusa", "Stripe", "PostgreSQL", "Redis", "Vercel"],
        pricing: &[
            PricingTier {
                name: "Starter",
                price: "$99",
                period: "/month",
                popular: false,
                features: &[
                    "Up to 100 products",
                    "2% transaction fee",
                    "Basic themes",
                    "Email support",
                ],
            },
            PricingTier {
                name: "Growth",
                price: "$299",
                period: "/month",
                popular: true,
                features: &[
                    "Unlimited products",
                    "1% transaction fee",
                    "Custom themes",
                    "Priority support",
                    "Marketing tools",
                ],
            },
            PricingTier {
                name: "Enterprise",
                price: "Custom",
                period: "",
                popular: false,
                features: &[
                    "Unlimited everything",
                    "0% transaction fee",
                    "White-label",
                    "Dedicated support",
                    "Multi-store",
                ],
            },
        ],
        use_cases: &[
            UseCase {
                icon: "👕",
                title: "Fashion Brands",
                desc: "Sell clothing with size variants and images",
            },
            UseCase {
                icon: "📚",
                title: "Digital Products",
                desc: "Sell ebooks, courses, and downloads",
            },
            UseCase {
                icon: "🍽️",
                title: "Food & Beverage",
                desc: "Restaurant and food delivery platforms",
            },
            UseCase {
                icon: "🎨",
                title: "Handmade Goods",
                desc: "Artisan marketplaces and craft stores",
            },
        ],
    },
    Service {
        key: ServiceKey::new("automation"),
        title: "Automation Engineering",
        category: ServiceCategory::Automation,
        icon: "⚙️",
        blurb: "Design, optimize, and automate your processes for smarter, faster operations using AI automation agents.",
        accent: Accent::new((0x1A, 0xBC, 0x9C), (0x0D, 0x34, 0x30)),
        features: &[
            "Process Automation",
            "AI Agents",
            "Workflow Optimization",
            "Integration Hub",
        ],
        detailed_features: &[
            Feature {
                icon: "🔄",
                title: "Process Automation",
                desc: "Automate end-to-end workflows",
            },
            Feature {
                icon: "🤖",
                title: "AI Agents",
                desc: "Custom AI agents for any task",
            },
            Feature {
                icon: "⚡",
                title: "Workflow Optimization",
                desc: "AI-powered process improvement",
            },
            Feature {
                icon: "🔗",
                title: "Integration Hub",
                desc: "Connect all your tools",
            },
            Feature {
                icon: "📊",
                title: "Analytics",
                desc: "Track automation performance",
            },
            Feature {
                icon: "🛡️",
                title: "Error Handling",
                desc: "Automatic retry and fallback",
            },
        ],
        tech_stack: &["n8n", "Python", "Crew AI", "OpenAI", "Zapier", "Make"],
        pricing: &[
            PricingTier {
                name: "Starter",
                price: "$199",
                period: "/month",
                popular: false,
                features: &[
                    "5 automations",
                    "10,000 tasks/month",
                    "Basic integrations",
                    "Email support",
                ],
            },
            PricingTier {
                name: "Professional",
                price: "$599",
                period: "/month",
                popular: true,
                features: &[
                    "Unlimited automations",
                    "100,000 tasks/month",
                    "Advanced integrations",
                    "Priority support",
                    "Custom AI agents",
                ],
            },
            PricingTier {
                name: "Enterprise",
                price: "Custom",
                period: "",
                popular: false,
                features: &[
                    "Unlimited everything",
                    "Dedicated infrastructure",
                    "White-label",
                    "24/7 support",
                    "SLA",
                ],
            },
        ],
        use_cases: &[
            UseCase {
                icon: "📧",
                title: "Email Automation",
                desc: "Automate email campaigns and responses",
            },
            UseCase {
                icon: "📊",
                title: "Data Processing",
                desc: "Automate data entry and analysis",
            },
            UseCase {
                icon: "🔔",
                title: "Notifications",
                desc: "Smart alerts and escalations",
            },
            UseCase {
                icon: "📝",
                title: "Document Generation",
                desc: "Auto-generate reports and contracts",
            },
        ],
    },
    Service {
        key: ServiceKey::new("mobile"),
        title: "Mobile App Development",
        category: ServiceCategory::Development,
        icon: "📱",
        blurb: "Build beautiful, high-performance native mobile apps for iOS and Android with cutting-edge technology.",
        accent: Accent::new((0x0D, 0x34, 0x30), (0xE8, 0xA5, 0x4B)),
        features: &[
            "Native Development",
            "Cross-Platform",
            "Push Notifications",
            "Offline Support",
        ],
        detailed_features: &[
            Feature {
                icon: "📱",
                title: "Native Development",
                desc: "Swift for iOS, Kotlin for Android",
            },
            Feature {
                icon: "🔄",
                title: "Cross-Platform",
                desc: "React Native or Flutter",
            },
            Feature {
                icon: "🔔",
                title: "Push Notifications",
                desc: "Firebase Cloud Messaging",
            },
            Feature {
                icon: "📴",
                title: "Offline Support",
                desc: "Local database sync",
            },
            Feature {
                icon: "🎨",
                title: "UI/UX Design",
                desc: "Custom design system",
            },
            Feature {
                icon: "🔒",
                title: "Security",
                desc: "Biometric auth and encryption",
            },
        ],
        tech_stack: &["React Native", "Swift", "Kotlin", "Firebase", "Redux", "TypeScript"],
        pricing: &[
            PricingTier {
                name: "MVP",
                price: "$15k",
                period: "one-time",
                popular: false,
                features: &[
                    "Single platform",
                    "Basic features",
                    "3 months support",
                    "App store submission",
                ],
            },
            PricingTier {
                name: "Full App",
                price: "$35k",
                period: "one-time",
                popular: true,
                features: &[
                    "iOS + Android",
                    "Advanced features",
                    "6 months support",
                    "Backend included",
                    "Analytics",
                ],
            },
            PricingTier {
                name: "Enterprise",
                price: "Custom",
                period: "",
                popular: false,
                features: &[
                    "Complex apps",
                    "Unlimited features",
                    "12 months support",
                    "Dedicated team",
                    "White-label",
                ],
            },
        ],
        use_cases: &[
            UseCase {
                icon: "🏃",
                title: "Fitness Apps",
                desc: "Workout tracking and health monitoring",
            },
            UseCase {
                icon: "🎮",
                title: "Gaming",
                desc: "Mobile games with social features",
            },
            UseCase {
                icon: "💬",
                title: "Social Networks",
                desc: "Chat and community platforms",
            },
            UseCase {
                icon: "🏦",
                title: "Fintech",
                desc: "Banking and payment apps",
            },
        ],
    },
    Service {
        key: ServiceKey::new("ai-ml"),
        title: "AI/ML Solutions",
        category: ServiceCategory::Ai,
        icon: "🤖",
        blurb: "Leverage artificial intelligence and machine learning to solve complex business problems and gain competitive advantages.",
        accent: Accent::new((0xE8, 0xA5, 0x4B), (0x16, 0xA0, 0x85)),
        features: &[
            "Custom AI Models",
            "Natural Language Processing",
            "Computer Vision",
            "Predictive Analytics",
        ],
        detailed_features: &[
            Feature {
                icon: "🧠",
                title: "Custom AI Models",
                desc: "Train models on your data",
            },
            Feature {
                icon: "💬",
                title: "NLP",
                desc: "Chatbots and text analysis",
            },
            Feature {
                icon: "👁️",
                title: "Computer Vision",
                desc: "Image and video analysis",
            },
            Feature {
                icon: "📈",
                title: "Predictive Analytics",
                desc: "Forecast trends and patterns",
            },
            Feature {
                icon: "🎯",
                title: "Recommendation Systems",
                desc: "Personalized recommendations",
            },
            Feature {
                icon: "🔍",
                title: "Anomaly Detection",
                desc: "Identify unusual patterns",
            },
        ],
        tech_stack: &["TensorFlow", "PyTorch", "OpenAI", "Hugging Face", "Python", "MLflow"],
        pricing: &[
            PricingTier {
                name: "Starter",
                price: "$2k",
                period: "/month",
                popular: false,
                features: &[
                    "Pre-trained models",
                    "API access",
                    "Basic customization",
                    "Email support",
                ],
            },
            PricingTier {
                name: "Professional",
                price: "$5k",
                period: "/month",
                popular: true,
                features: &[
                    "Custom models",
                    "Model training",
                    "Advanced features",
                    "Priority support",
                    "Model monitoring",
                ],
            },
            PricingTier {
                name: "Enterprise",
                price: "Custom",
                period: "",
                popular: false,
                features: &[
                    "Dedicated infrastructure",
                    "Research team",
                    "Unlimited training",
                    "24/7 support",
                    "On-premise option",
                ],
            },
        ],
        use_cases: &[
            UseCase {
                icon: "🛒",
                title: "E-commerce",
                desc: "Product recommendations and search",
            },
            UseCase {
                icon: "🏥",
                title: "Healthcare",
                desc: "Disease prediction and diagnosis",
            },
            UseCase {
                icon: "💰",
                title: "Finance",
                desc: "Fraud detection and risk analysis",
            },
            UseCase {
                icon: "🏭",
                title: "Manufacturing",
                desc: "Quality control and predictive maintenance",
            },
        ],
    },
];

const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        number: "01",
        icon: "🤖",
        title: "AI Driven",
        desc: "Applications built using AI agents and designed for agent interaction, with custom agents when required.",
        accent: Accent::new((0xEC, 0x48, 0x99), (0xF4, 0x3F, 0x5E)),
    },
    ProcessStep {
        number: "02",
        icon: "🧩",
        title: "Modular",
        desc: "Component-based architecture for easy customization and expansion as your business grows.",
        accent: Accent::new((0xA8, 0x55, 0xF7), (0x8B, 0x5C, 0xF6)),
    },
    ProcessStep {
        number: "03",
        icon: "🌟",
        title: "Open Source",
        desc: "Built on transparent, community-supported foundations to avoid vendor lock-in.",
        accent: Accent::new((0xF5, 0x9E, 0x0B), (0xF9, 0x73, 0x16)),
    },
    ProcessStep {
        number: "04",
        icon: "☁️",
        title: "Cloud Native",
        desc: "Your code and data, running on your cloud, giving you full control and ownership.",
        accent: Accent::new((0x06, 0xB6, 0xD4), (0x3B, 0x82, 0xF6)),
    },
];

const TOOLS: [Tool; 6] = [
    Tool {
        name: "AI Agents",
        icon: "🤖",
        desc: "Advanced coding assistants like Cursor, Replit Agent, Lovable, and custom in-house agents.",
        accent: Accent::new((0x0D, 0x34, 0x30), (0x16, 0xA0, 0x85)),
    },
    Tool {
        name: "Crew AI",
        icon: "👥",
        desc: "Orchestration platform enabling seamless multi-agent collaboration and workflow automation.",
        accent: Accent::new((0x16, 0xA0, 0x85), (0x1A, 0xBC, 0x9C)),
    },
    Tool {
        name: "Refine",
        icon: "⚡",
        desc: "React-powered framework for rapidly building sophisticated internal applications.",
        accent: Accent::new((0x1A, 0xBC, 0x9C), (0xE8, 0xA5, 0x4B)),
    },
    Tool {
        name: "Retool",
        icon: "🛠️",
        desc: "Low-code platform for assembling internal tools quickly with drag-and-drop components.",
        accent: Accent::new((0xE8, 0xA5, 0x4B), (0xD4, 0xAF, 0x37)),
    },
    Tool {
        name: "Medusa",
        icon: "🛍️",
        desc: "Flexible, open-source commerce engine for building modern e-commerce experiences.",
        accent: Accent::new((0xD4, 0xAF, 0x37), (0x0D, 0x34, 0x30)),
    },
    Tool {
        name: "n8n",
        icon: "🔗",
        desc: "Visual workflow automation tool connecting apps and services to streamline operations.",
        accent: Accent::new((0x63, 0x66, 0xF1), (0xA8, 0x55, 0xF7)),
    },
];

const PROJECTS: [Project; 6] = [
    Project {
        key: ProjectKey::new("fashionhub"),
        title: "E-commerce Platform",
        sector: "E-commerce",
        client: "FashionHub Inc.",
        shipped: ShipDate::new(Month::January, 2025),
        icon: "🛒",
        blurb: "Scalable online marketplace with AI-powered product recommendations and automated inventory management.",
        accent: Accent::new((0xEC, 0x48, 0x99), (0xF4, 0x3F, 0x5E)),
        tags: &["Next.js", "Medusa", "Stripe", "AI"],
        results: &[
            Outcome { metric: "250%", label: "Sales Increase" },
            Outcome { metric: "45%", label: "Faster Checkout" },
            Outcome { metric: "99.9%", label: "Uptime" },
        ],
        features: &[
            "AI-Powered Product Recommendations",
            "Real-time Inventory Management",
            "Multi-currency Support",
            "Advanced Analytics Dashboard",
            "Mobile-First Design",
            "Integrated Payment Gateway",
        ],
        challenge: "FashionHub needed to modernize their outdated e-commerce platform to compete with major retailers while handling 10,000+ daily visitors.",
        solution: "We built a headless commerce solution using Medusa with a Next.js frontend, implementing AI-driven personalization and real-time inventory sync across 3 warehouses.",
        testimonial: Some(Testimonial {
            quote: "TechForge transformed our online store completely. Sales tripled in the first quarter!",
            author: "Sarah Johnson",
            role: "CEO, FashionHub Inc.",
        }),
    },
    Project {
        key: ProjectKey::new("salesforce-pro"),
        title: "Sales CRM System",
        sector: "Business Software",
        client: "SalesForce Pro",
        shipped: ShipDate::new(Month::December, 2024),
        icon: "📊",
        blurb: "Custom relationship management system with intelligent lead scoring and automated follow-up workflows.",
        accent: Accent::new((0xA8, 0x55, 0xF7), (0x63, 0x66, 0xF1)),
        tags: &["React", "Node.js", "PostgreSQL", "AI"],
        results: &[
            Outcome { metric: "180%", label: "Lead Conversion" },
            Outcome { metric: "60%", label: "Time Saved" },
            Outcome { metric: "95%", label: "User Satisfaction" },
        ],
        features: &[
            "AI Lead Scoring",
            "360° Customer View",
            "Automated Email Campaigns",
            "Sales Pipeline Visualization",
            "Mobile CRM App",
            "Advanced Reporting",
        ],
        challenge: "SalesForce Pro was losing leads due to manual processes and lack of follow-up automation, resulting in missed opportunities.",
        solution: "Custom CRM with AI-powered lead scoring, automated workflows, and predictive analytics to prioritize high-value prospects.",
        testimonial: Some(Testimonial {
            quote: "Our sales team efficiency increased by 60%. This CRM changed the game for us.",
            author: "Michael Chen",
            role: "VP of Sales, SalesForce Pro",
        }),
    },
    Project {
        key: ProjectKey::new("logisticsx"),
        title: "Operations Dashboard",
        sector: "Internal Tools",
        client: "LogisticsX Global",
        shipped: ShipDate::new(Month::November, 2024),
        icon: "📈",
        blurb: "Real-time internal tool for tracking team performance, resource allocation, and project milestones.",
        accent: Accent::new((0xF9, 0x73, 0x16), (0xF5, 0x9E, 0x0B)),
        tags: &["React", "Python", "FastAPI", "D3.js"],
        results: &[
            Outcome { metric: "40%", label: "Efficiency Gain" },
            Outcome { metric: "85%", label: "Faster Reporting" },
            Outcome { metric: "100%", label: "Real-time Accuracy" },
        ],
        features: &[
            "Real-time Data Visualization",
            "Custom KPI Tracking",
            "Team Performance Metrics",
            "Resource Allocation Tools",
            "Predictive Analytics",
            "Automated Alerts",
        ],
        challenge: "LogisticsX was using multiple disconnected tools, making it impossible to get real-time visibility into operations.",
        solution: "Unified dashboard aggregating data from 15+ sources with real-time updates, custom visualizations, and predictive insights.",
        testimonial: Some(Testimonial {
            quote: "Finally, we have one source of truth. Decision-making has never been faster.",
            author: "Jennifer Lee",
            role: "COO, LogisticsX Global",
        }),
    },
    Project {
        key: ProjectKey::new("payflow"),
        title: "Fintech Payment App",
        sector: "Fintech",
        client: "PayFlow Solutions",
        shipped: ShipDate::new(Month::October, 2024),
        icon: "💰",
        blurb: "Decentralized finance application with smart contract integration and automated trading strategies.",
        accent: Accent::new((0x06, 0xB6, 0xD4), (0x3B, 0x82, 0xF6)),
        tags: &["React Native", "Blockchain", "Web3", "Node.js"],
        results: &[
            Outcome { metric: "$50M+", label: "Transactions" },
            Outcome { metric: "<2s", label: "Processing Time" },
            Outcome { metric: "50K+", label: "Active Users" },
        ],
        features: &[
            "Instant Peer-to-Peer Payments",
            "Multi-currency Wallet",
            "Smart Contract Integration",
            "Biometric Security",
            "Transaction History & Analytics",
            "Low Transaction Fees",
        ],
        challenge: "PayFlow needed a secure, fast payment solution that could handle high transaction volumes while maintaining regulatory compliance.",
        solution: "Built a blockchain-based payment system with smart contracts, multi-layer security, and real-time transaction processing.",
        testimonial: Some(Testimonial {
            quote: "The app is lightning fast and our users love the simplicity. Best investment we made.",
            author: "David Martinez",
            role: "Founder, PayFlow Solutions",
        }),
    },
    Project {
        key: ProjectKey::new("medicare-plus"),
        title: "Healthcare Portal",
        sector: "Healthcare",
        client: "MediCare Plus",
        shipped: ShipDate::new(Month::September, 2024),
        icon: "🏥",
        blurb: "HIPAA-compliant patient portal with telemedicine, appointment scheduling, and medical records management.",
        accent: Accent::new((0x10, 0xB9, 0x81), (0x14, 0xB8, 0xA6)),
        tags: &["React", "HIPAA", "WebRTC", "AWS"],
        results: &[
            Outcome { metric: "300%", label: "Patient Engagement" },
            Outcome { metric: "70%", label: "Admin Time Saved" },
            Outcome { metric: "98%", label: "Appointment Attendance" },
        ],
        features: &[
            "Telemedicine Video Calls",
            "Electronic Health Records",
            "Appointment Scheduling",
            "Prescription Management",
            "Secure Messaging",
            "HIPAA Compliance",
        ],
        challenge: "MediCare needed to digitize patient interactions while ensuring strict HIPAA compliance and data security.",
        solution: "HIPAA-compliant portal with end-to-end encryption, secure video conferencing, and integrated EHR system.",
        testimonial: Some(Testimonial {
            quote: "Our patients can now access care from anywhere. The platform is secure and easy to use.",
            author: "Dr. Amanda Williams",
            role: "Chief Medical Officer, MediCare Plus",
        }),
    },
    Project {
        key: ProjectKey::new("contentpro"),
        title: "AI Content Generator",
        sector: "AI/ML",
        client: "ContentPro AI",
        shipped: ShipDate::new(Month::August, 2024),
        icon: "✍️",
        blurb: "AI-powered content creation platform for marketing teams with SEO optimization and brand voice training.",
        accent: Accent::new((0x8B, 0x5C, 0xF6), (0xA8, 0x55, 0xF7)),
        tags: &["Python", "GPT-4", "React", "NLP"],
        results: &[
            Outcome { metric: "10x", label: "Content Output" },
            Outcome { metric: "90%", label: "Time Reduction" },
            Outcome { metric: "4.5/5", label: "Quality Rating" },
        ],
        features: &[
            "AI Content Generation",
            "SEO Optimization",
            "Brand Voice Training",
            "Multi-language Support",
            "Plagiarism Detection",
            "Content Calendar",
        ],
        challenge: "ContentPro needed to scale content production without sacrificing quality or brand consistency.",
        solution: "Custom AI platform trained on brand guidelines with SEO optimization and quality control mechanisms.",
        testimonial: Some(Testimonial {
            quote: "We went from 10 articles per week to 100. The AI nails our brand voice every time.",
            author: "Rachel Green",
            role: "CMO, ContentPro AI",
        }),
    },
];

const CONTACT: Contact = Contact {
    phone_label: "Call Direct",
    phone: "+91 914 203 1933",
    email_label: "Email Us",
    email: "kumarvinay16244@gmail.com",
    links: &[
        FooterLink { label: "Privacy Policy", icon: "🔒" },
        FooterLink { label: "Contact", icon: "📧" },
        FooterLink { label: "LinkedIn", icon: "💼" },
        FooterLink { label: "Twitter", icon: "🐦" },
    ],
    taglines: &[
        "Accelerating digital transformation with smart technology and streamlined development 💡",
        "AI-powered solutions. Lightning-fast delivery. 🚀",
    ],
    copyright: "© TechForge 2025. Made with ❤️ TechForge 🌈",
};

/// The studio prospectus as shipped. Catalog construction re-checks key
/// uniqueness, so a bad edit to the tables above fails here rather than
/// rendering oddly.
pub fn stock() -> Result<SiteContent> {
    let services =
        Catalog::new(SERVICES.to_vec()).context("failed to assemble the services catalog")?;
    let work = Catalog::new(PROJECTS.to_vec()).context("failed to assemble the work catalog")?;
    Ok(SiteContent {
        studio: STUDIO,
        hero: HERO,
        services_copy: SERVICES_COPY,
        services,
        process_copy: PROCESS_COPY,
        process: &PROCESS_STEPS,
        tools_copy: TOOLS_COPY,
        tools: &TOOLS,
        work_copy: WORK_COPY,
        work,
        contact: CONTACT,
    })
}
