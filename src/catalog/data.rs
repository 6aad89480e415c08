//! Built-in template registry

use super::palette::Palette;
use super::Template;

/// Every template shipped with uiforge, in catalog display order
pub static TEMPLATES: &[Template] = &[
    Template {
        slug: "neo-brutalism",
        name: "Neo Brutalism",
        description: "Raw, bold interfaces with thick borders, hard shadows and unapologetic color blocks.",
        category: "Modern",
        tags: &["brutalism", "bold", "contrast", "playful"],
        features: &[
            "Thick black borders",
            "Hard offset shadows",
            "High-contrast color blocks",
            "Chunky display typography",
        ],
        colors: Palette::new("#FFE600", "#FF6B6B", "#4ECDC4", "#FFFFFF", "#000000"),
    },
    Template {
        slug: "glassmorphism",
        name: "Glassmorphism",
        description: "Frosted glass panels floating over vivid gradients with soft translucent depth.",
        category: "Modern",
        tags: &["glass", "blur", "gradient", "translucent"],
        features: &[
            "Frosted glass cards",
            "Backdrop blur effects",
            "Gradient backdrops",
            "Soft translucent borders",
        ],
        colors: Palette::new(
            "#8B5CF6",
            "#EC4899",
            "#06B6D4",
            "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            "#FFFFFF",
        ),
    },
    Template {
        slug: "cyberpunk-futuristic",
        name: "Cyberpunk Futuristic",
        description: "Neon-lit dark interfaces inspired by dystopian megacities and sci-fi HUDs.",
        category: "Tech",
        tags: &["neon", "dark", "futuristic", "sci-fi"],
        features: &[
            "Neon glow accents",
            "HUD-style panels",
            "Glitch-ready typography",
            "Dark high-contrast layout",
        ],
        colors: Palette::new("#00FFFF", "#FF00FF", "#FFFF00", "#0A0A0F", "#E0E0FF"),
    },
    Template {
        slug: "dark-luxury",
        name: "Dark Luxury",
        description: "Elegant black and gold aesthetic for premium brands and high-end products.",
        category: "Business",
        tags: &["luxury", "dark", "gold", "elegant"],
        features: &[
            "Gold accent details",
            "Serif display headings",
            "Subtle glow on hover",
            "Premium dark surfaces",
        ],
        colors: Palette::new("#CA8A04", "#18181B", "#FACC15", "#09090B", "#FAFAFA"),
    },
    Template {
        slug: "skeuomorphism-modern",
        name: "Modern Skeuomorphism",
        description: "Soft neumorphic surfaces with tactile extruded and inset shadows.",
        category: "Modern",
        tags: &["neumorphism", "soft", "tactile", "light"],
        features: &[
            "Extruded soft shadows",
            "Inset pressed states",
            "Monochrome surfaces",
            "Tactile controls",
        ],
        colors: Palette::new("#6B7280", "#E5E7EB", "#3B82F6", "#F3F4F6", "#1F2937"),
    },
    Template {
        slug: "claymorphism",
        name: "Claymorphism",
        description: "Puffy, clay-like 3D elements with playful pastel colors and rounded shapes.",
        category: "Creative",
        tags: &["clay", "3d", "pastel", "rounded"],
        features: &[
            "Inflated 3D cards",
            "Inner highlight shadows",
            "Pastel color palette",
            "Extra-rounded corners",
        ],
        colors: Palette::new("#3B82F6", "#F472B6", "#FBBF24", "#EFF6FF", "#1E3A8A"),
    },
    Template {
        slug: "retro-80s",
        name: "Retro 80s",
        description: "Synthwave sunsets, chrome type and skewed neon shapes straight from the 1980s.",
        category: "Retro",
        tags: &["synthwave", "neon", "retro", "80s"],
        features: &[
            "Skewed neon buttons",
            "Synthwave color scheme",
            "Offset drop shadows",
            "Italic display type",
        ],
        colors: Palette::new("#EC4899", "#8B5CF6", "#22D3EE", "#0F0A1E", "#FDF4FF"),
    },
    Template {
        slug: "retro-pixel-art",
        name: "Retro Pixel Art",
        description: "8-bit inspired UI with pixel fonts, chunky borders and arcade colors.",
        category: "Retro",
        tags: &["pixel", "8-bit", "gaming", "arcade"],
        features: &[
            "Pixel-perfect borders",
            "Arcade color palette",
            "Monospaced pixel fonts",
            "Press-down button states",
        ],
        colors: Palette::new("#2563EB", "#FACC15", "#22C55E", "#1E3A8A", "#FFFFFF"),
    },
    Template {
        slug: "corporate-professional",
        name: "Corporate Professional",
        description: "Trustworthy, structured layouts for enterprises, consultancies and B2B products.",
        category: "Business",
        tags: &["corporate", "business", "clean", "enterprise"],
        features: &[
            "Structured grid layout",
            "Conservative color scheme",
            "Accessible form controls",
            "Compact data badges",
        ],
        colors: Palette::new("#1A2B3C", "#F1F5F9", "#2563EB", "#FFFFFF", "#0F172A"),
    },
    Template {
        slug: "ai-modern-interface",
        name: "AI Modern Interface",
        description: "Sleek dark UI for AI products with glowing accents and glass surfaces.",
        category: "Tech",
        tags: &["ai", "dark", "modern", "glass"],
        features: &[
            "Glowing focus states",
            "Glass chat surfaces",
            "Rounded floating cards",
            "Dark-first palette",
        ],
        colors: Palette::new("#3B82F6", "#1E293B", "#A855F7", "#020617", "#F8FAFC"),
    },
    Template {
        slug: "startup-saas",
        name: "Startup SaaS",
        description: "Conversion-focused landing pages for SaaS launches with friendly purple tones.",
        category: "Business",
        tags: &["saas", "startup", "landing", "conversion"],
        features: &[
            "Pill-shaped call to action",
            "Pricing-ready cards",
            "Soft purple shadows",
            "Hover scale interactions",
        ],
        colors: Palette::new("#7C3AED", "#F5F3FF", "#F59E0B", "#FFFFFF", "#1F2937"),
    },
    Template {
        slug: "minimalist-clean",
        name: "Minimalist Clean",
        description: "Whitespace-first design with restrained typography and quiet details.",
        category: "Minimal",
        tags: &["minimal", "clean", "whitespace", "simple"],
        features: &[
            "Generous whitespace",
            "Underline-only inputs",
            "Light font weights",
            "Monochrome accents",
        ],
        colors: Palette::new("#000000", "#F5F5F5", "#737373", "#FFFFFF", "#171717"),
    },
    Template {
        slug: "gradient-vibrant",
        name: "Gradient Vibrant",
        description: "Bold gradients and energetic pinks for brands that want to stand out.",
        category: "Creative",
        tags: &["gradient", "vibrant", "colorful", "bold"],
        features: &[
            "Vibrant gradient backgrounds",
            "Playful hover rotations",
            "Extra-rounded cards",
            "Heavy display type",
        ],
        colors: Palette::new(
            "#EC4899",
            "#F97316",
            "#8B5CF6",
            "linear-gradient(120deg, #fdf2f8 0%, #fff7ed 100%)",
            "#1F2937",
        ),
    },
    Template {
        slug: "monochrome-editorial",
        name: "Monochrome Editorial",
        description: "Magazine-style black and white layouts with strong serif typography.",
        category: "Minimal",
        tags: &["editorial", "monochrome", "magazine", "serif"],
        features: &[
            "Serif editorial headings",
            "Rule-separated sections",
            "Inverted hover states",
            "Strict black and white",
        ],
        colors: Palette::new("#000000", "#FFFFFF", "#525252", "#FAFAFA", "#0A0A0A"),
    },
    Template {
        slug: "playful-colorful",
        name: "Playful Colorful",
        description: "Bouncy, cheerful UI with candy colors for kids, games and community apps.",
        category: "Creative",
        tags: &["playful", "fun", "colorful", "kids"],
        features: &[
            "Bouncy pressable buttons",
            "Candy color palette",
            "Thick rounded borders",
            "Tilted sticker badges",
        ],
        colors: Palette::new("#EC4899", "#14B8A6", "#FACC15", "#FFFBEB", "#1F2937"),
    },
    Template {
        slug: "nature-organic",
        name: "Nature Organic",
        description: "Earthy greens and soft organic shapes for eco and wellness brands.",
        category: "Lifestyle",
        tags: &["nature", "organic", "eco", "green"],
        features: &[
            "Organic rounded shapes",
            "Earthy green palette",
            "Soft inner glows",
            "Relaxed spacing",
        ],
        colors: Palette::new("#047857", "#D1FAE5", "#A16207", "#F0FDF4", "#064E3B"),
    },
    Template {
        slug: "japanese-zen",
        name: "Japanese Zen",
        description: "Calm, balanced compositions inspired by washi paper and ink brush accents.",
        category: "Minimal",
        tags: &["zen", "japanese", "calm", "minimal"],
        features: &[
            "Washi paper tones",
            "Vermilion ink accents",
            "Slow, calm transitions",
            "Wide letter spacing",
        ],
        colors: Palette::new("#DC2626", "#F5F0E6", "#1C1917", "#FCF9F2", "#0C0A09"),
    },
    Template {
        slug: "tech-dashboard",
        name: "Tech Dashboard",
        description: "Data-dense admin dashboards with monospaced metrics and indigo highlights.",
        category: "Tech",
        tags: &["dashboard", "admin", "data", "dark"],
        features: &[
            "Monospaced metrics",
            "Dense data cards",
            "Keyboard-friendly controls",
            "Indigo status highlights",
        ],
        colors: Palette::new("#6366F1", "#1E293B", "#22D3EE", "#0F172A", "#E2E8F0"),
    },
    Template {
        slug: "bold-typography",
        name: "Bold Typography",
        description: "Oversized headlines and stark contrast that let the words do the work.",
        category: "Creative",
        tags: &["typography", "bold", "contrast", "statement"],
        features: &[
            "Oversized headlines",
            "Heavy left rules",
            "Uppercase display type",
            "Stark contrast",
        ],
        colors: Palette::new("#000000", "#2563EB", "#EF4444", "#FFFFFF", "#0A0A0A"),
    },
    Template {
        slug: "gaming-theme",
        name: "Gaming Theme",
        description: "Aggressive angles, red energy and esports-ready panels.",
        category: "Entertainment",
        tags: &["gaming", "esports", "dark", "action"],
        features: &[
            "Skewed action buttons",
            "Esports red palette",
            "Glass stat panels",
            "Punchy italic type",
        ],
        colors: Palette::new("#DC2626", "#18181B", "#F97316", "#09090B", "#FAFAFA"),
    },
    Template {
        slug: "health-wellness",
        name: "Health & Wellness",
        description: "Calm blues and rounded cards for clinics, therapy and wellness apps.",
        category: "Lifestyle",
        tags: &["health", "wellness", "medical", "calm"],
        features: &[
            "Calming blue tones",
            "Rounded appointment cards",
            "Soft elevation",
            "Accessible contrast",
        ],
        colors: Palette::new("#0EA5E9", "#E0F2FE", "#10B981", "#F8FAFC", "#0F172A"),
    },
    Template {
        slug: "education-learning",
        name: "Education & Learning",
        description: "Friendly, structured layouts for courses, e-learning and academies.",
        category: "Industry",
        tags: &["education", "learning", "courses", "friendly"],
        features: &[
            "Course progress cards",
            "Pressable 3D buttons",
            "Friendly indigo palette",
            "Clear content hierarchy",
        ],
        colors: Palette::new("#4F46E5", "#EEF2FF", "#F59E0B", "#FFFFFF", "#1E1B4B"),
    },
    Template {
        slug: "real-estate-modern",
        name: "Real Estate Modern",
        description: "Clean property listings with sharp edges and confident navy tones.",
        category: "Industry",
        tags: &["real-estate", "property", "listings", "modern"],
        features: &[
            "Large listing cards",
            "Sharp-edged layout",
            "Spaced uppercase labels",
            "Search-ready inputs",
        ],
        colors: Palette::new("#1E40AF", "#F1F5F9", "#D97706", "#FFFFFF", "#0F172A"),
    },
    Template {
        slug: "architect-portfolio",
        name: "Architect Portfolio",
        description: "Precise, grid-driven portfolio for architects and design studios.",
        category: "Creative",
        tags: &["portfolio", "architecture", "grid", "minimal"],
        features: &[
            "Hairline borders",
            "Precise grid system",
            "Slow outline transitions",
            "Stone neutral palette",
        ],
        colors: Palette::new("#292524", "#F5F5F4", "#A8A29E", "#FAFAF9", "#1C1917"),
    },
    Template {
        slug: "fashion-boutique",
        name: "Fashion Boutique",
        description: "Editorial fashion storefront with serif type and blush accents.",
        category: "Lifestyle",
        tags: &["fashion", "boutique", "ecommerce", "elegant"],
        features: &[
            "Serif product headings",
            "Soft diffuse shadows",
            "Inverted hover buttons",
            "Blush accent badges",
        ],
        colors: Palette::new("#BE185D", "#FDF2F8", "#A16207", "#FFFFFF", "#111111"),
    },
    Template {
        slug: "coffee-shop-cozy",
        name: "Coffee Shop Cozy",
        description: "Warm browns and cozy textures for cafés, bakeries and roasters.",
        category: "Industry",
        tags: &["coffee", "cafe", "warm", "cozy"],
        features: &[
            "Warm roasted palette",
            "Pressable menu buttons",
            "Cream paper cards",
            "Friendly rounded shapes",
        ],
        colors: Palette::new("#78350F", "#FEF3C7", "#EA580C", "#FFFBEB", "#451A03"),
    },
    Template {
        slug: "photography-dark",
        name: "Photography Dark",
        description: "Image-first dark galleries that keep the focus on the photography.",
        category: "Creative",
        tags: &["photography", "gallery", "dark", "portfolio"],
        features: &[
            "Full-bleed image grids",
            "Minimal dark chrome",
            "Outline call to action",
            "Tight uppercase labels",
        ],
        colors: Palette::new("#FFFFFF", "#18181B", "#F43F5E", "#000000", "#FAFAFA"),
    },
    Template {
        slug: "crypto-dashboard",
        name: "Crypto Dashboard",
        description: "Emerald-on-black trading dashboards with monospaced tickers.",
        category: "Tech",
        tags: &["crypto", "finance", "trading", "dark"],
        features: &[
            "Monospaced tickers",
            "Emerald glow accents",
            "Portfolio cards",
            "Dark trading surfaces",
        ],
        colors: Palette::new("#10B981", "#18181B", "#F59E0B", "#09090B", "#ECFDF5"),
    },
    Template {
        slug: "travel-explorer",
        name: "Travel Explorer",
        description: "Adventurous travel layouts with sky blues and sunset accents.",
        category: "Lifestyle",
        tags: &["travel", "adventure", "booking", "bright"],
        features: &[
            "Destination cards",
            "Floating hover lift",
            "Sky and sunset palette",
            "Booking-ready inputs",
        ],
        colors: Palette::new("#0284C7", "#E0F2FE", "#F97316", "#FFFFFF", "#0C4A6E"),
    },
    Template {
        slug: "law-firm-professional",
        name: "Law Firm Professional",
        description: "Authoritative navy and serif layouts for legal and advisory firms.",
        category: "Business",
        tags: &["law", "legal", "professional", "serif"],
        features: &[
            "Authoritative serif type",
            "Navy and bronze palette",
            "Practice area cards",
            "Understated controls",
        ],
        colors: Palette::new("#1E3A8A", "#F8FAFC", "#B45309", "#FFFFFF", "#0F172A"),
    },
    Template {
        slug: "music-studio-pro",
        name: "Music Studio Pro",
        description: "Loud, high-energy layouts for artists, labels and recording studios.",
        category: "Entertainment",
        tags: &["music", "studio", "dark", "energetic"],
        features: &[
            "High-energy lime accents",
            "Track list cards",
            "Italic uppercase type",
            "Dark stage surfaces",
        ],
        colors: Palette::new("#A3E635", "#27272A", "#F43F5E", "#09090B", "#FAFAFA"),
    },
    Template {
        slug: "non-profit-impact",
        name: "Non-Profit Impact",
        description: "Warm, hopeful design for charities, causes and community projects.",
        category: "Industry",
        tags: &["non-profit", "charity", "community", "warm"],
        features: &[
            "Donation-ready buttons",
            "Hopeful green palette",
            "Impact statistic cards",
            "Friendly rounded forms",
        ],
        colors: Palette::new("#16A34A", "#FEF9C3", "#F97316", "#FFFFFF", "#14532D"),
    },
    Template {
        slug: "ecommerce-modern",
        name: "E-commerce Modern",
        description: "Product-focused storefront with crisp cards and clear calls to action.",
        category: "Business",
        tags: &["ecommerce", "shop", "retail", "modern"],
        features: &[
            "Product grid cards",
            "Sale accent badges",
            "Hover elevation",
            "Checkout-ready forms",
        ],
        colors: Palette::new("#111827", "#F3F4F6", "#EF4444", "#FFFFFF", "#030712"),
    },
    Template {
        slug: "fitness-tracker",
        name: "Fitness Tracker",
        description: "Bold, high-intensity layouts for gyms, coaches and fitness apps.",
        category: "Lifestyle",
        tags: &["fitness", "sport", "energetic", "bold"],
        features: &[
            "High-intensity red palette",
            "Workout stat cards",
            "Heavy italic headlines",
            "Bold bordered controls",
        ],
        colors: Palette::new("#EF4444", "#FEE2E2", "#FACC15", "#FFFFFF", "#18181B"),
    },
    Template {
        slug: "ai-saas-platform",
        name: "AI SaaS Platform",
        description: "Violet-glow SaaS surfaces for AI platforms and developer tools.",
        category: "Tech",
        tags: &["ai", "saas", "dark", "glow"],
        features: &[
            "Violet glow effects",
            "Blurred glass panels",
            "Dark gradient backdrop",
            "Developer-friendly layout",
        ],
        colors: Palette::new(
            "#8B5CF6",
            "#18181B",
            "#22D3EE",
            "linear-gradient(180deg, #09090b 0%, #1e1b4b 100%)",
            "#FAFAFA",
        ),
    },
    Template {
        slug: "news-editorial",
        name: "News Editorial",
        description: "Dense, readable news layouts with strong hierarchy and red highlights.",
        category: "Minimal",
        tags: &["news", "editorial", "media", "magazine"],
        features: &[
            "Strong headline hierarchy",
            "Breaking news badges",
            "Offset shadow buttons",
            "Readable column layout",
        ],
        colors: Palette::new("#DC2626", "#F9FAFB", "#111827", "#FFFFFF", "#030712"),
    },
    Template {
        slug: "restaurant-premium",
        name: "Restaurant Premium",
        description: "Fine-dining presence with amber tones, serif type and generous spacing.",
        category: "Industry",
        tags: &["restaurant", "food", "premium", "elegant"],
        features: &[
            "Menu section cards",
            "Serif uppercase type",
            "Amber candlelight palette",
            "Reservation-ready inputs",
        ],
        colors: Palette::new("#B45309", "#FEF3C7", "#7F1D1D", "#FFFBEB", "#292524"),
    },
    Template {
        slug: "productivity-tool",
        name: "Productivity Tool",
        description: "Focused, tidy UI for task managers, notes and team tools.",
        category: "Business",
        tags: &["productivity", "saas", "tasks", "clean"],
        features: &[
            "Task list cards",
            "Subtle press feedback",
            "Focused blue palette",
            "Tidy form controls",
        ],
        colors: Palette::new("#2563EB", "#F8FAFC", "#8B5CF6", "#FFFFFF", "#0F172A"),
    },
    Template {
        slug: "art-gallery",
        name: "Art Gallery",
        description: "Quiet, museum-like layouts with wide spacing and delicate type.",
        category: "Creative",
        tags: &["art", "gallery", "museum", "minimal"],
        features: &[
            "Museum-like spacing",
            "Delicate outline buttons",
            "Translucent artwork cards",
            "Wide letter spacing",
        ],
        colors: Palette::new("#1C1917", "#FAFAF9", "#B91C1C", "#FFFFFF", "#0C0A09"),
    },
    Template {
        slug: "gaming-news",
        name: "Gaming News",
        description: "Arcade-bright gaming news with chunky cards and amber highlights.",
        category: "Entertainment",
        tags: &["gaming", "news", "arcade", "bold"],
        features: &[
            "Chunky arcade buttons",
            "Amber headline cards",
            "Review score badges",
            "Dark console surfaces",
        ],
        colors: Palette::new("#FBBF24", "#1F2937", "#EF4444", "#111827", "#F9FAFB"),
    },
];
