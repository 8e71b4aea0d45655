//! Static link tables for the header: platform switcher, Trader's Hub link and menu items.

use serde::Serialize;

/// Image loaded over the network by the header (`ExternalIcon`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconRef {
    pub url: &'static str,
    pub alt: &'static str,
    pub size: u32,
}

/// Entry of the platform switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub active: bool,
    pub label: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    /// Small icon shown on the switcher button.
    pub button_icon: IconRef,
    pub icon: IconRef,
    pub show_in_eu: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Anchor,
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub kind: LinkKind,
    pub href: &'static str,
    pub icon: IconRef,
    pub label: &'static str,
}

pub const PLATFORMS: &[LinkEntry] = &[
    LinkEntry {
        active: true,
        label: "Bot",
        href: "https://bot.binarylab.site",
        description: "Automated trading at your fingertips. No coding needed.",
        button_icon: IconRef {
            url: "assests/home.svg",
            alt: "Bot Logo",
            size: 25,
        },
        icon: IconRef {
            url: "assets/home.svg",
            alt: "Bot Logo",
            size: 32,
        },
        show_in_eu: false,
    },
    LinkEntry {
        active: true,
        label: "Trade",
        href: "https://trade.binarylab.site",
        description: "Trade with advanced automation. Customised trading tools.",
        button_icon: IconRef {
            url: "assets/trade.svg",
            alt: "Trade Logo",
            size: 25,
        },
        icon: IconRef {
            url: "assets/trade.svg",
            alt: "Trade Logo",
            size: 32,
        },
        show_in_eu: true,
    },
];

pub const TRADERS_HUB_LINK: MenuItem = MenuItem {
    kind: LinkKind::Anchor,
    href: "https://binarylab.site",
    icon: IconRef {
        url: "assets/home.svg",
        alt: "Trader's Hub",
        size: 20,
    },
    label: "",
};

pub const MENU_ITEMS: &[MenuItem] = &[MenuItem {
    kind: LinkKind::Anchor,
    href: "https://t.me/binaryfx_site",
    icon: IconRef {
        url: "assets/telegram.svg",
        alt: "Telegram",
        size: 20,
    },
    label: "",
}];

/// Platforms to show for the client's region. Inactive entries are never shown.
pub fn visible_platforms(is_eu: bool) -> impl Iterator<Item = &'static LinkEntry> {
    PLATFORMS
        .iter()
        .filter(move |entry| entry.active && (!is_eu || entry.show_in_eu))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_filter() {
        let all: Vec<_> = visible_platforms(false).map(|p| p.href).collect();
        assert_eq!(
            all,
            vec!["https://bot.binarylab.site", "https://trade.binarylab.site"]
        );

        let eu: Vec<_> = visible_platforms(true).map(|p| p.href).collect();
        assert_eq!(eu, vec!["https://trade.binarylab.site"]);
    }

    #[test]
    fn test_links_are_absolute() {
        let hrefs = PLATFORMS
            .iter()
            .map(|p| p.href)
            .chain(MENU_ITEMS.iter().map(|m| m.href))
            .chain(std::iter::once(TRADERS_HUB_LINK.href));
        for href in hrefs {
            assert!(href.starts_with("https://"), "{}", href);
        }
    }

    #[test]
    fn test_menu_item_serializes_kind() {
        let json = serde_json::to_value(MENU_ITEMS[0]).unwrap();
        assert_eq!(json["kind"], "anchor");
        assert_eq!(json["icon"]["alt"], "Telegram");
    }
}
