use crate::entities::Place;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}

pub fn rating_text(rating: f32) -> String {
    format!("★ {:.1}", rating)
}

pub fn price_text(level: u8) -> String {
    if level == 0 {
        return "Free".into();
    }

    "$".repeat(level.min(4) as usize)
}

/// Detail popup opened when a place is focused.
pub fn popup_html(place: &Place) -> String {
    let style = place.category.style();

    let mut extras = String::new();
    if let Some(rating) = place.rating {
        extras.push_str(&format!("<span class=\"rating\">{}</span>", rating_text(rating)));
    }
    if let Some(level) = place.price_level {
        extras.push_str(&format!("<span class=\"price\">{}</span>", price_text(level)));
    }
    if let Some(address) = &place.address {
        extras.push_str(&format!("<p class=\"muted\">{}</p>", escape(address)));
    }

    format!(
        "<div class=\"popup\"><img src=\"{image}\" alt=\"{name}\" /><div><h3>{name}</h3><p>{description}</p>{extras}<span class=\"chip\" style=\"background:{color}\">{glyph} {category}</span></div></div>",
        image = escape(place.image_or_placeholder()),
        name = escape(&place.name),
        description = escape(&place.description),
        extras = extras,
        color = style.color,
        glyph = style.glyph,
        category = escape(place.category.label()),
    )
}
