//! Default content served when the content service is empty or unreachable.

use crate::model::{
    CompanyLogo, CtaSection, CustomerStory, Feature, HeroSlide, Insight, LinkTarget,
    PlatformFeature, Role, SectionLocation,
};

pub const DEFAULT_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

pub fn hero_slides() -> Vec<HeroSlide> {
    let slides = [
        (
            "Contentstack",
            "The world's best digital experiences start here",
            None,
            "Product overview",
            "/platform",
            DEFAULT_GRADIENT,
        ),
        (
            "Agent OS",
            "Unlock your future",
            Some("Seamlessly integrate intelligent agents, AI-powered automation and advanced workflows, all in one platform"),
            "Agent OS",
            "/platforms/ai",
            "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
        ),
        (
            "Personalization",
            "Welcome to the Context Economy",
            Some("One-size-fits-all digital experiences are over. Adapting to customers in the moment is critical."),
            "Join us",
            "/blog/announcements/welcome-to-the-context-economy",
            "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
        ),
        (
            "Headless CMS",
            "Modernize your CMS",
            Some("Create experiences faster across more channels with an easy-to-use, future-ready platform"),
            "Explore the platform",
            "/platforms/headless-cms",
            "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
        ),
    ];
    slides
        .into_iter()
        .enumerate()
        .map(
            |(i, (subtitle, title, description, cta, href, gradient))| HeroSlide {
                title: title.to_string(),
                subtitle: subtitle.to_string(),
                description: description.map(str::to_string),
                cta: LinkTarget::new(cta, href),
                gradient: gradient.to_string(),
                display_order: i as i64 + 1,
            },
        )
        .collect()
}

pub fn company_logos() -> Vec<CompanyLogo> {
    [
        "ASICS",
        "Mattel",
        "Walmart",
        "Top Golf Callway",
        "Steve Madden",
        "MongoDB",
        "Alaska Airlines",
        "bol",
        "callaway",
        "crocs",
        "glassdoor",
        "icelandair",
        "livenation",
        "mondelez",
        "mitsubishi electrics",
    ]
    .into_iter()
    .enumerate()
    .map(|(i, name)| CompanyLogo {
        company_name: name.to_string(),
        logo_url: None,
        company_url: None,
        display_order: i as i64 + 1,
    })
    .collect()
}

pub fn features() -> Vec<Feature> {
    [
        (
            "A headless CMS built for flexibility",
            "Maintain complete control of your technology with an API-first, cloud-based headless CMS.",
            "Learn more about Headless CMS",
            "/platforms/headless-cms",
        ),
        (
            "Highly personalized",
            "Leverage data and automation so you're delivering the right message in the right place and at the right time.",
            "Learn more about personalization",
            "/platforms/omnichannel-personalization",
        ),
        (
            "Powerful customer analytics",
            "All of your customer data, unified and ready for action, across every channel and audience.",
            "Learn more about real time data",
            "/platforms/real-time-cdp",
        ),
        (
            "Effortless front-end hosting",
            "Fully integrated. Fully automated. MACH-compliant. This is front-end hosting that works for you, not against you.",
            "Learn more about launch",
            "/platforms/launch",
        ),
        (
            "Intelligent agents, built for action",
            "Deploy agents that combine reasoning, brand context, and tools to accelerate your work where it matters most.",
            "Learn more about agents",
            "/platforms/ai",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, description, cta, href))| Feature {
        title: title.to_string(),
        description: description.to_string(),
        cta: LinkTarget::new(cta, href),
        icon: None,
        is_featured: i == 0,
        display_order: i as i64 + 1,
    })
    .collect()
}

pub fn customer_stories() -> Vec<CustomerStory> {
    [
        (
            "Walmart scales globally with Contentstack",
            "Walmart",
            "Learn how Walmart transformed their digital presence with our headless CMS solution.",
            "https://via.placeholder.com/400x250?text=Walmart+Case+Study",
            "/case-studies/walmart",
        ),
        (
            "Mattel delivers magical experiences",
            "Mattel",
            "Discover how Mattel created engaging digital experiences for children worldwide.",
            "https://via.placeholder.com/400x250?text=Mattel+Case+Study",
            "/case-studies/mattel",
        ),
        (
            "ASICS runs ahead with personalization",
            "ASICS",
            "See how ASICS leveraged our platform to deliver personalized customer experiences.",
            "https://via.placeholder.com/400x250?text=ASICS+Case+Study",
            "/case-studies/asics",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(
        |(i, (title, company, description, image, href))| CustomerStory {
            title: title.to_string(),
            company_name: company.to_string(),
            description: description.to_string(),
            image: Some(image.to_string()),
            metric: None,
            cta: LinkTarget::new("Read more", href),
            is_featured: true,
            display_order: i as i64 + 1,
        },
    )
    .collect()
}

pub fn insights() -> Vec<Insight> {
    [
        (
            "The ultimate guide to headless CMS",
            "E-book",
            "https://via.placeholder.com/300x200?text=Headless+CMS+Guide",
            "/resources/ebook/ultimate-guide-to-headless-cms",
        ),
        (
            "First-party data activation guide for marketers",
            "Report",
            "https://via.placeholder.com/300x200?text=Data+Activation+Guide",
            "/resources/report/first-party-data-activation-guide-for-marketers",
        ),
        (
            "The Digital Experience Platforms Landscape, Q3 2025",
            "Report",
            "https://via.placeholder.com/300x200?text=DXP+Landscape",
            "/resources/report/digital-experience-platforms-landscape",
        ),
    ]
    .into_iter()
    .map(|(title, tag, image, href)| Insight {
        title: title.to_string(),
        tag: tag.to_string(),
        description: String::new(),
        image: Some(image.to_string()),
        content: String::new(),
        cta: LinkTarget::new("Read more", href),
        download_file: None,
        publish_date: String::new(),
    })
    .collect()
}

/// Every default CTA section; callers filter by page.
pub fn cta_sections() -> Vec<CtaSection> {
    vec![
        CtaSection {
            section_title: "The adaptive digital experience era is here.".to_string(),
            title: "Reimagine possible".to_string(),
            description: "Because with Contentstack, it is possible. And we'll help you get there."
                .to_string(),
            primary_cta: LinkTarget::new("Request a demo", "/request-demo"),
            secondary_cta: LinkTarget::new(
                "Begin the journey",
                "/platforms/omnichannel-personalization",
            ),
            background_style: "default".to_string(),
            section_location: SectionLocation::Home,
        },
        CtaSection {
            section_title: "Why legacy platforms hold you back".to_string(),
            title: "Ready to reimagine possible?".to_string(),
            description: "Learn more about Contentstack Edge, the adaptive experience platform that powers real-time, omnichannel personalization.".to_string(),
            primary_cta: LinkTarget::new("Request a demo", "/request-demo"),
            secondary_cta: LinkTarget::new("See the comparison", "/comparison"),
            background_style: "default".to_string(),
            section_location: SectionLocation::Platform,
        },
    ]
}

pub fn platform_features() -> Vec<PlatformFeature> {
    [
        (
            "Omnichannel personalization",
            "Deliver content that dynamically adapts to your visitors, across every channel.",
            [
                "Use first-party data in real time",
                "Experiment with A/B/n testing to find what works",
                "Orchestrate audience journeys across all channels",
            ],
            "/platforms/omnichannel-personalization",
            DEFAULT_GRADIENT,
        ),
        (
            "Headless content management",
            "Bring flexibility, security and reliability to your content management with a system that's API-first and native to the cloud.",
            [
                "Make edits visually without code",
                "Navigate content changes chronologically",
                "Drag and drop components for simple building",
            ],
            "/platforms/headless-cms",
            "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
        ),
        (
            "Real-time data and insights",
            "Understand your customers to a greater level of precision and adapt in real time based on their behaviors.",
            [
                "Build dynamic profiles from multiple sources",
                "Segment audiences automatically",
                "Gain insights that help you make better decisions",
            ],
            "/platforms/real-time-cdp",
            "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
        ),
        (
            "Front-end hosting",
            "Bring your content to life quickly and painlessly, on your terms, with MACH-compliant front-end hosting.",
            [
                "Work with your choice of tools and frameworks",
                "Connect in just a few clicks",
                "Run functions in the cloud or at the edge",
            ],
            "/platforms/launch",
            "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
        ),
        (
            "Agents & Automations",
            "Leverage AI and powerful in-platform Agents across to automate and scale your content production.",
            [
                "Author on-brand content with LLMs",
                "Build workflows that automate repetitive tasks",
                "Generate reports and summaries for your team",
            ],
            "/platforms/ai",
            "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(
        |(i, (title, description, bullets, href, gradient))| PlatformFeature {
            title: title.to_string(),
            description: description.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            cta: LinkTarget::new("Learn more", href),
            gradient: gradient.to_string(),
            icon: None,
            display_order: i as i64 + 1,
        },
    )
    .collect()
}

pub fn roles() -> Vec<Role> {
    [
        (
            "Business users",
            "Uncover new efficiencies in your workflows so you do better work, faster.",
            "/roles/business",
        ),
        (
            "Developers & IT",
            "Break free from the monolith. Build how you want, with the tools you want.",
            "/roles/developers",
        ),
        (
            "Digital leaders",
            "Empower your teams to do better work and unlock the full potential of your brand, at any scale.",
            "/roles/leaders",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, description, href))| Role {
        title: title.to_string(),
        description: description.to_string(),
        cta: LinkTarget::new("Learn more", href),
        icon: None,
        display_order: i as i64 + 1,
    })
    .collect()
}
