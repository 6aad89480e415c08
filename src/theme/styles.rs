//! Per-template component class strings

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Tailwind class strings for the core components of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentStyles {
    pub button: &'static str,
    pub card: &'static str,
    pub input: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
}

impl ComponentStyles {
    /// `(component, classes)` pairs for display
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut entries = vec![
            ("button", self.button),
            ("card", self.card),
            ("input", self.input),
        ];
        if let Some(badge) = self.badge {
            entries.push(("badge", badge));
        }
        entries
    }
}

/// Styles used for slugs missing from the table
pub const DEFAULT_STYLES: ComponentStyles = ComponentStyles {
    button: "shadow-md hover:shadow-lg transition-all",
    card: "shadow-lg border",
    input: "border focus:ring-2",
    badge: None,
};

const fn styles(
    button: &'static str,
    card: &'static str,
    input: &'static str,
    badge: &'static str,
) -> ComponentStyles {
    ComponentStyles {
        button,
        card,
        input,
        badge: Some(badge),
    }
}

static STYLE_TABLE: Lazy<HashMap<&'static str, ComponentStyles>> = Lazy::new(|| {
    HashMap::from([
        (
            "neo-brutalism",
            styles(
                "border-4 border-black shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] hover:shadow-[2px_2px_0px_0px_rgba(0,0,0,1)] transition-all uppercase font-black",
                "border-4 border-black shadow-[8px_8px_0px_0px_rgba(0,0,0,1)] rounded-none",
                "border-4 border-black focus:shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] rounded-none font-bold",
                "border-2 border-black rounded-none font-black uppercase shadow-[2px_2px_0_0_black]",
            ),
        ),
        (
            "glassmorphism",
            styles(
                "backdrop-blur-md bg-white/20 border border-white/30 shadow-lg hover:bg-white/30",
                "backdrop-blur-lg bg-white/10 border border-white/20 shadow-2xl rounded-3xl",
                "backdrop-blur-md bg-white/10 border border-white/20 rounded-xl",
                "backdrop-blur-md bg-white/10 border border-white/20",
            ),
        ),
        (
            "cyberpunk-futuristic",
            styles(
                "bg-slate-900 border-2 border-cyan-500 text-cyan-400 shadow-[0_0_15px_rgba(0,255,255,0.3)] hover:shadow-[0_0_25px_rgba(0,255,255,0.6)] uppercase font-bold",
                "bg-slate-900/90 border-2 border-cyan-500 shadow-[0_0_20px_rgba(0,255,255,0.2)] rounded-none",
                "bg-slate-900 border-2 border-cyan-500 text-cyan-400 focus:shadow-[0_0_10px_rgba(0,255,255,0.5)]",
                "border border-cyan-500 bg-cyan-500/10 text-cyan-400",
            ),
        ),
        (
            "dark-luxury",
            styles(
                "bg-yellow-600 text-black font-semibold hover:shadow-[0_0_20px_rgba(202,138,4,0.3)] transition-all",
                "bg-zinc-900 border border-yellow-600/30 shadow-2xl",
                "bg-zinc-900 border border-yellow-600/30 focus:border-yellow-600 text-yellow-500",
                "border border-yellow-600/50 text-yellow-500 bg-yellow-600/10",
            ),
        ),
        (
            "skeuomorphism-modern",
            styles(
                "rounded-2xl bg-gray-100 text-gray-800 shadow-[6px_6px_12px_#bebebe,-6px_-6px_12px_#ffffff] hover:shadow-[inset_6px_6px_12px_#bebebe,inset_-6px_-6px_12px_#ffffff] transition-all duration-300",
                "bg-gray-100 rounded-[40px] shadow-[20px_20px_60px_#bebebe,-20px_-20px_60px_#ffffff] border-0",
                "bg-gray-100 shadow-[inset_4px_4px_8px_#bebebe,inset_-4px_-4px_8px_#ffffff] rounded-xl border-0",
                "shadow-[2px_2px_4px_#bebebe,-2px_-2px_4px_#ffffff] bg-gray-100 text-gray-700 rounded-full",
            ),
        ),
        (
            "claymorphism",
            styles(
                "rounded-[2rem] bg-blue-500 text-white shadow-[8px_8px_16px_rgba(59,130,246,0.3),inset_-4px_-4px_8px_rgba(0,0,0,0.1),inset_4px_4px_8px_rgba(255,255,255,0.3)] border-0",
                "bg-white/80 rounded-[3rem] shadow-[20px_20px_40px_rgba(0,0,0,0.05),inset_-10px_-10px_20px_rgba(0,0,0,0.05),inset_10px_10px_20px_rgba(255,255,255,0.8)] border-4 border-white",
                "bg-blue-50 rounded-2xl shadow-[inset_4px_4px_8px_rgba(0,0,0,0.05)] border-0",
                "bg-blue-100 text-blue-600 rounded-full shadow-[inset_2px_2px_4px_rgba(0,0,0,0.05)] border-0",
            ),
        ),
        (
            "retro-80s",
            styles(
                "bg-pink-500 text-white font-black italic shadow-[4px_4px_0_#22d3ee] skew-x-[-10deg] uppercase",
                "bg-slate-900 border-2 border-purple-500 shadow-[10px_10px_0_#db2777] skew-x-[-2deg]",
                "bg-slate-800 border-2 border-cyan-400 text-cyan-400 skew-x-[-5deg]",
                "bg-cyan-400 text-slate-900 font-bold italic skew-x-[-15deg]",
            ),
        ),
        (
            "retro-pixel-art",
            styles(
                "border-4 border-white bg-blue-600 text-white font-mono shadow-[6px_6px_0_0_black] active:translate-x-1 active:translate-y-1 active:shadow-none uppercase",
                "border-4 border-white bg-blue-900 text-white shadow-[10px_10px_0_0_black]",
                "border-4 border-white bg-black text-green-500 font-mono",
                "bg-yellow-400 text-black border-2 border-white font-mono",
            ),
        ),
        (
            "corporate-professional",
            styles(
                "bg-[#1a2b3c] hover:bg-blue-700 text-white rounded-sm font-semibold transition-colors",
                "bg-white border border-gray-200 shadow-sm rounded-lg",
                "border border-gray-300 focus:border-blue-600 focus:ring-1 focus:ring-blue-600 rounded-sm",
                "bg-blue-50 text-blue-700 border border-blue-200 uppercase tracking-wider text-[10px] rounded-sm",
            ),
        ),
        (
            "ai-modern-interface",
            styles(
                "bg-white text-black hover:bg-blue-500 hover:text-white rounded-[1rem] font-bold shadow-lg shadow-white/5 transition-all border-0",
                "bg-[#0f172a]/50 border border-white/10 backdrop-blur-xl rounded-[2rem] shadow-2xl shadow-black/50",
                "bg-white/5 border border-white/10 focus:border-blue-500 rounded-xl text-white",
                "bg-blue-500/10 text-blue-400 border border-blue-500/20 rounded-full px-4",
            ),
        ),
        (
            "startup-saas",
            styles(
                "bg-purple-600 text-white rounded-full font-bold hover:scale-105 transition-transform border-0",
                "bg-white border hover:border-purple-600/50 shadow-[0_10px_40px_rgba(124,58,237,0.1)] rounded-2xl transition-all",
                "bg-gray-50 border-gray-100 focus:border-purple-600 rounded-xl",
                "bg-purple-100 text-purple-700 font-bold px-3 py-1 rounded-full",
            ),
        ),
        (
            "minimalist-clean",
            styles(
                "bg-black text-white hover:bg-gray-800 rounded-full font-light px-8 tracking-tight transition-all",
                "bg-white border border-gray-100 shadow-sm rounded-none",
                "border-b-2 border-gray-100 focus:border-black rounded-none px-0",
                "bg-gray-100 text-gray-800 font-medium px-2 py-0.5 rounded-none uppercase text-[10px] tracking-widest",
            ),
        ),
        (
            "gradient-vibrant",
            styles(
                "bg-pink-500 text-white rounded-[2rem] font-black uppercase shadow-xl hover:rotate-1 active:scale-95 transition-all border-0",
                "bg-white rounded-[3rem] shadow-[0_20px_50px_rgba(236,72,153,0.1)] border border-pink-100 overflow-hidden",
                "bg-pink-50/50 border-2 border-pink-100 focus:border-pink-500 rounded-2xl",
                "bg-pink-500 text-white font-black rounded-full px-4",
            ),
        ),
        (
            "monochrome-editorial",
            styles(
                "border-4 border-black bg-white hover:bg-black hover:text-white rounded-none font-black uppercase text-xl transition-all",
                "border-y-2 border-black rounded-none shadow-none",
                "border-2 border-black rounded-none font-serif text-lg",
                "bg-black text-white px-4 py-1 rounded-none uppercase text-xs font-black tracking-tighter",
            ),
        ),
        (
            "playful-colorful",
            styles(
                "bg-pink-500 text-white rounded-[2.5rem] font-black italic shadow-[0_10px_0_#db2777] hover:translate-y-1 hover:shadow-[0_6px_0_#db2777] active:translate-y-2 active:shadow-none transition-all border-0",
                "bg-white rounded-[3rem] border-8 border-teal-500 shadow-[20px_20px_0_rgba(20,184,166,0.1)]",
                "bg-teal-50 border-4 border-teal-200 focus:border-teal-500 rounded-[2rem] px-6 text-teal-800 font-bold",
                "bg-yellow-400 text-black border-4 border-black rounded-full font-black -rotate-3",
            ),
        ),
        (
            "nature-organic",
            styles(
                "bg-emerald-700 hover:bg-emerald-800 text-white rounded-[40px] px-10 py-7 text-lg font-bold shadow-lg transition-all",
                "bg-emerald-50 rounded-[60px] border-0 shadow-[inset_0_0_40px_rgba(5,150,105,0.05)]",
                "bg-emerald-100/50 border-2 border-emerald-200 focus:border-emerald-700 rounded-[30px] px-8",
                "bg-emerald-600 text-white rounded-full px-6 py-1 text-xs border-0",
            ),
        ),
        (
            "japanese-zen",
            styles(
                "border-black border-2 rounded-none px-12 py-8 text-lg hover:bg-black hover:text-white transition-all font-sans uppercase tracking-widest font-black transition-all duration-700",
                "border border-black/5 bg-[#fcf9f2] rounded-none hover:bg-black/5 transition-colors duration-500",
                "bg-transparent border-b border-black rounded-none focus:border-red-600 px-0 transition-all",
                "text-red-600 font-bold uppercase tracking-[0.3em] text-[10px]",
            ),
        ),
        (
            "tech-dashboard",
            styles(
                "bg-indigo-600 hover:bg-indigo-500 text-white font-mono font-black uppercase rounded-sm border-b-4 border-indigo-800 transition-all active:border-b-0 active:translate-y-1",
                "bg-[#1e293b] border border-slate-800 rounded-lg shadow-2xl",
                "bg-[#0f172a] border border-slate-700 text-indigo-400 font-mono focus:border-indigo-500 rounded",
                "bg-indigo-500/20 text-indigo-400 border border-indigo-500/30 uppercase text-[10px] font-bold px-2",
            ),
        ),
        (
            "bold-typography",
            styles(
                "bg-black text-white hover:bg-blue-600 rounded-none px-12 py-10 text-3xl font-black uppercase transition-all duration-300 border-0",
                "border-l-[20px] border-black bg-white rounded-none p-12",
                "border-[10px] border-black text-4xl font-black uppercase p-8 rounded-none",
                "text-[2vw] font-black uppercase tracking-tighter leading-none border-b-[5px] border-black",
            ),
        ),
        (
            "gaming-theme",
            styles(
                "bg-red-600 hover:bg-red-500 text-white font-black italic text-2xl h-24 px-12 rounded-none skew-x-[-15deg] shadow-[8px_8px_0_#991b1b] active:translate-x-2 active:translate-y-2 active:shadow-none transition-all border-0",
                "bg-white/5 border-l-4 border-red-600 backdrop-blur-md rounded-r-lg shadow-[20px_20px_60px_rgba(220,38,38,0.1)]",
                "bg-black/50 border-2 border-red-600/50 text-white skew-x-[-10deg] focus:border-red-600",
                "bg-red-600 text-white font-black italic px-3 py-1 uppercase text-xs skew-x-[-20deg]",
            ),
        ),
        (
            "health-wellness",
            styles(
                "bg-primary text-white rounded-full px-8 py-6 font-semibold shadow-lg hover:shadow-primary/20 transition-all border-0",
                "bg-white rounded-[2.5rem] border-0 shadow-xl shadow-blue-500/5",
                "bg-blue-50/30 border-2 border-blue-100 focus:border-primary rounded-2xl",
                "bg-primary/10 text-primary border-0 rounded-full",
            ),
        ),
        (
            "education-learning",
            styles(
                "bg-primary text-white rounded-lg px-6 py-4 font-bold shadow-[0_4px_0_rgb(var(--primary-dark))] hover:translate-y-0.5 hover:shadow-[0_2px_0_rgb(var(--primary-dark))] transition-all",
                "bg-white border-2 border-gray-100 rounded-2xl shadow-sm",
                "bg-gray-50 border-2 border-gray-100 focus:border-primary rounded-lg",
                "bg-accent text-white font-bold rounded-md",
            ),
        ),
        (
            "real-estate-modern",
            styles(
                "bg-primary text-white rounded-none px-10 py-5 font-medium hover:bg-primary/90 transition-all uppercase tracking-widest",
                "bg-white border-none shadow-2xl rounded-none",
                "border-gray-200 focus:border-primary rounded-none",
                "bg-gray-100 text-gray-800 rounded-none border-l-4 border-primary",
            ),
        ),
        (
            "architect-portfolio",
            styles(
                "border border-primary text-primary hover:bg-primary hover:text-white rounded-none px-12 py-6 transition-all duration-500 uppercase tracking-[0.2em]",
                "bg-transparent border border-primary/10 rounded-none",
                "bg-transparent border-b border-primary/20 focus:border-primary rounded-none px-0",
                "text-primary uppercase tracking-widest text-[10px] border-b border-primary/50",
            ),
        ),
        (
            "fashion-boutique",
            styles(
                "bg-black text-white hover:bg-white hover:text-black border border-black rounded-none px-10 py-5 transition-all duration-300 font-serif",
                "bg-white border-none shadow-[30px_30px_60px_#efefef,-30px_-30px_60px_#ffffff] rounded-none",
                "border-b border-black rounded-none px-0 focus:border-primary",
                "bg-primary text-white rounded-full font-serif italic",
            ),
        ),
        (
            "coffee-shop-cozy",
            styles(
                "bg-primary text-white rounded-xl font-medium shadow-[0_6px_0_#451a03] hover:translate-y-0.5 hover:shadow-[0_3px_0_#451a03] active:translate-y-1 active:shadow-none transition-all",
                "bg-secondary rounded-[2rem] border-2 border-primary/10",
                "bg-white border-2 border-primary/10 rounded-xl focus:border-primary",
                "bg-accent text-white rounded-full",
            ),
        ),
        (
            "photography-dark",
            styles(
                "border-2 border-white text-white hover:bg-white hover:text-black transition-all px-12 py-6 uppercase font-bold tracking-tighter",
                "bg-zinc-900 border border-white/5 rounded-none",
                "bg-zinc-900 border border-white/20 text-white focus:border-white",
                "bg-accent text-white rounded-none",
            ),
        ),
        (
            "crypto-dashboard",
            styles(
                "bg-primary text-black font-mono font-bold rounded-md shadow-[0_0_20px_rgba(16,185,129,0.2)] hover:shadow-[0_0_30px_rgba(16,185,129,0.4)]",
                "bg-zinc-950 border border-primary/20 rounded-xl shadow-2xl",
                "bg-zinc-900 border-primary/30 text-primary font-mono",
                "bg-primary/10 text-primary border border-primary/20 font-mono",
            ),
        ),
        (
            "travel-explorer",
            styles(
                "bg-primary text-white rounded-2xl shadow-xl shadow-primary/20 hover:scale-105 transition-transform font-bold",
                "bg-white rounded-[2rem] border-0 shadow-2xl shadow-blue-500/5 hover:translate-y-[-10px] transition-all",
                "bg-gray-50 border-0 rounded-2xl focus:ring-4 focus:ring-primary/10",
                "bg-accent text-white rounded-full font-bold",
            ),
        ),
        (
            "law-firm-professional",
            styles(
                "bg-primary text-white rounded-sm px-8 py-5 font-serif border-b-4 border-blue-900",
                "bg-white border border-gray-100 shadow-xl rounded-none",
                "border-gray-200 focus:border-primary rounded-sm",
                "bg-blue-50 text-primary border border-primary/20 rounded-none font-serif",
            ),
        ),
        (
            "music-studio-pro",
            styles(
                "bg-white text-black rounded-none font-black uppercase text-xl italic hover:bg-primary transition-colors duration-200",
                "bg-zinc-900 border-t-8 border-primary rounded-none shadow-2xl",
                "bg-zinc-800 border-none text-white focus:ring-2 focus:ring-primary",
                "bg-accent text-white font-black uppercase italic",
            ),
        ),
        (
            "non-profit-impact",
            styles(
                "bg-primary text-white rounded-full px-10 py-6 font-bold shadow-lg hover:rotate-1 active:scale-95 transition-all border-0",
                "bg-white rounded-[3rem] border-4 border-secondary shadow-none",
                "bg-secondary/30 border-0 rounded-2xl focus:bg-white focus:ring-4 focus:ring-primary/20",
                "bg-accent text-white rounded-full font-bold",
            ),
        ),
        (
            "ecommerce-modern",
            styles(
                "bg-primary text-white rounded-md font-bold hover:bg-primary/90 transition-all uppercase tracking-tight",
                "bg-white border border-gray-100 shadow-sm hover:shadow-xl transition-all",
                "border-gray-300 focus:border-primary rounded-md",
                "bg-accent text-white rounded-sm font-bold",
            ),
        ),
        (
            "fitness-tracker",
            styles(
                "bg-primary text-white rounded-none font-black uppercase text-2xl italic tracking-tighter hover:bg-white hover:text-primary border-4 border-primary transition-all",
                "bg-white border-l-[12px] border-primary rounded-none shadow-2xl",
                "bg-gray-100 border-0 text-xl font-bold rounded-none focus:bg-white focus:ring-4 focus:ring-primary/20",
                "bg-primary text-white font-black uppercase rounded-none",
            ),
        ),
        (
            "ai-saas-platform",
            styles(
                "bg-white text-black hover:bg-primary hover:text-white rounded-2xl font-bold shadow-[0_0_30px_rgba(139,92,246,0.3)] transition-all border-0",
                "bg-zinc-900/60 border border-white/10 backdrop-blur-3xl rounded-[2.5rem] shadow-2xl",
                "bg-white/5 border border-white/10 focus:border-primary rounded-xl text-white",
                "bg-primary/20 text-primary border border-primary/30 rounded-full",
            ),
        ),
        (
            "news-editorial",
            styles(
                "bg-primary text-white rounded-none font-bold italic shadow-[4px_4px_0_#111827] hover:translate-x-1 hover:translate-y-1 hover:shadow-none transition-all",
                "bg-white border-2 border-gray-100 rounded-none shadow-none",
                "border-2 border-gray-100 focus:border-primary rounded-none",
                "bg-zinc-900 text-white rounded-none px-4",
            ),
        ),
        (
            "restaurant-premium",
            styles(
                "bg-primary text-white rounded-full px-12 py-6 font-serif uppercase tracking-[0.3em] hover:bg-primary/90 transition-all shadow-2xl",
                "bg-[#fffbeb] border border-primary/10 rounded-[4rem] shadow-none",
                "bg-transparent border-b-2 border-primary/20 focus:border-primary px-0 rounded-none",
                "text-primary border border-primary font-serif italic text-lg px-6 rounded-full",
            ),
        ),
        (
            "productivity-tool",
            styles(
                "bg-primary text-white rounded-xl font-bold shadow-lg shadow-primary/20 hover:scale-[1.02] active:scale-[0.98] transition-all border-0",
                "bg-white border border-gray-200 rounded-3xl shadow-2xl shadow-gray-200/50",
                "bg-gray-50 border border-gray-200 focus:border-primary rounded-xl",
                "bg-accent/10 text-accent border border-accent/20 rounded-lg",
            ),
        ),
        (
            "art-gallery",
            styles(
                "border border-primary text-primary hover:bg-primary hover:text-white transition-all duration-700 px-16 py-8 uppercase tracking-[0.4em] rounded-none",
                "bg-white/50 backdrop-blur-sm border-0 rounded-none shadow-none",
                "bg-transparent border-b border-gray-300 focus:border-primary px-0 rounded-none",
                "text-accent font-light uppercase tracking-widest",
            ),
        ),
        (
            "gaming-news",
            styles(
                "bg-primary text-black font-black uppercase text-2xl h-24 px-12 rounded-lg border-b-8 border-black hover:translate-y-1 hover:border-b-4 active:translate-y-2 active:border-b-0 transition-all",
                "bg-secondary border-4 border-primary rounded-3xl shadow-[0_20px_0_rgba(251,191,36,0.1)]",
                "bg-black/50 border-4 border-primary/50 text-primary font-black uppercase focus:border-primary",
                "bg-accent text-white font-black uppercase rounded-lg shadow-[4px_4px_0_rgba(0,0,0,1)]",
            ),
        ),
    ])
});

/// Component styles for a slug, or [`DEFAULT_STYLES`] when the slug is unknown
pub fn component_styles(slug: &str) -> ComponentStyles {
    STYLE_TABLE.get(slug).copied().unwrap_or(DEFAULT_STYLES)
}

/// Whether the slug has a dedicated entry in the style table
pub fn has_custom_styles(slug: &str) -> bool {
    STYLE_TABLE.contains_key(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TEMPLATES;

    #[test]
    fn test_lookup_known_slug() {
        let styles = component_styles("retro-80s");
        assert!(styles.button.contains("skew-x-[-10deg]"));
        assert_eq!(
            styles.badge,
            Some("bg-cyan-400 text-slate-900 font-bold italic skew-x-[-15deg]")
        );
    }

    #[test]
    fn test_unknown_slug_uses_default() {
        let styles = component_styles("not-a-template");
        assert_eq!(styles, DEFAULT_STYLES);
        assert_eq!(styles.entries().len(), 3);
    }

    #[test]
    fn test_every_template_has_custom_styles() {
        for template in TEMPLATES {
            assert!(has_custom_styles(template.slug), "{}", template.slug);
        }
    }
}
