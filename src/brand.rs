/// BizEdge branding kit.
#[derive(Debug)]
pub struct BrandKit {
    pub name: &'static str,
    pub colors: BrandColors,
    pub fonts: BrandFonts,
    pub vibe: &'static str,
}

#[derive(Debug)]
pub struct BrandColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub dark_bg: &'static str,
}

#[derive(Debug)]
pub struct BrandFonts {
    pub heading: &'static str,
    pub body: &'static str,
}

pub static BRAND: BrandKit = BrandKit {
    name: "BizEdge",
    colors: BrandColors {
        primary: "#2563eb",
        secondary: "#7c3aed",
        accent: "#22d3ee",
        dark_bg: "#0a0b0f",
    },
    fonts: BrandFonts {
        heading: "Inter, system-ui, sans-serif",
        body: "Inter, system-ui, sans-serif",
    },
    vibe: "Trustworthy, bold, tech-forward with glassmorphism and subtle motion",
};

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature { title: "Smart Billing & Invoicing", desc: "Custom templates, GST, QR payments, WhatsApp/Email share", icon: "➤" },
    Feature { title: "Inventory Management", desc: "Auto stock update, low-stock alerts, barcode ready", icon: "▤" },
    Feature { title: "CRM & Credit Tracking", desc: "Customer/Supplier 360°, reminders, statements", icon: "⛨" },
    Feature { title: "Reports & Exports", desc: "Profit, expenses, cash flow; export to Excel/PDF", icon: "↗" },
    Feature { title: "Multi-user & Cloud", desc: "Role-based access, sync across devices", icon: "◍" },
    Feature { title: "AI Insights", desc: "Discount suggestions, reorder guidance, trends", icon: "✦" },
];

pub const HERO_BADGES: &[&str] = &["GST & QR enabled", "Cloud sync"];

pub const PLATFORM_NOTES: &[&str] = &[
    "Web app, Desktop (Electron), Mobile (React Native) ready",
    "Offline-first with local cache and sync on reconnect",
    "Secure backup & restore with encryption",
];

/// Parses `#rrggbb` into its channels.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
