//! Pure projection from a restaurant record to display fields.
//!
//! Nothing here touches I/O or the clock: the caller supplies the user
//! coordinate and today's weekday, and gets back every string the screen
//! needs. The lookup tables are declarative data; the emoji table is
//! priority-ordered, so the first matching tag wins.

use chrono::Weekday;
use serde::Serialize;
use studybites_api_client::endpoints::restaurants::{
    GeoPoint, HoursTable, RestaurantProperties, RestaurantRecord, Tag,
};
use studybites_geo::{Coordinate, distance_miles};

/// Priority-ordered tag → emoji table. The first entry whose tag id matches
/// one of the record's tags decides the emoji.
const TAG_EMOJI: &[(&str, &str)] = &[
    ("urn:tag:category:bar", "🍺"),
    ("urn:tag:category:night_club", "🎵"),
    ("urn:tag:genre:restaurant:bar", "🍻"),
    ("urn:tag:genre:restaurant:fast_food", "🍔"),
    ("urn:tag:genre:restaurant:pizza", "🍕"),
    ("urn:tag:genre:restaurant:italian", "🍝"),
    ("urn:tag:genre:restaurant:chinese", "🥡"),
    ("urn:tag:genre:restaurant:japanese", "🍣"),
    ("urn:tag:genre:restaurant:mexican", "🌮"),
    ("urn:tag:genre:restaurant:indian", "🍛"),
    ("urn:tag:genre:restaurant:thai", "🍜"),
    ("urn:tag:genre:restaurant:american", "🍔"),
    ("urn:tag:genre:restaurant:seafood", "🦞"),
    ("urn:tag:genre:restaurant:steakhouse", "🥩"),
    ("urn:tag:genre:restaurant:cafe", "☕"),
    ("urn:tag:category:coffee_shop", "☕"),
    ("urn:tag:category:bakery", "🧁"),
    ("urn:tag:category:ice_cream_shop", "🍦"),
];

/// Generic storefront glyph when no tag matches.
const FALLBACK_EMOJI: &str = "🏪";

/// Tag id → feature icon table. Unrecognized feature tags get a checkmark.
const FEATURE_ICONS: &[(&str, &str)] = &[
    ("urn:tag:accessibility:wheelchair_accessible_entrance", "♿"),
    ("urn:tag:accessibility:wheelchair_accessible_seating", "♿"),
    ("urn:tag:accessibility:wheelchair_accessible_restroom", "♿"),
    ("urn:tag:service_options:delivery", "🚚"),
    ("urn:tag:service_options:outdoor_seating", "🌤️"),
    ("urn:tag:service_options:dine_in", "🍽️"),
    ("urn:tag:payments:credit_cards", "💳"),
    ("urn:tag:payments:nfc_mobile_payments", "📱"),
    ("urn:tag:amenity:wi_fi", "📶"),
    ("urn:tag:amenity:restroom", "🚻"),
    ("urn:tag:planning:accepts_reservations", "📞"),
    ("urn:tag:amenity:bar_onsite", "🍷"),
    ("urn:tag:offerings:vegan_options", "🥬"),
    ("urn:tag:payments:cash_only", "💵"),
    ("urn:tag:children:good_for_kids", "🧒"),
];

const FALLBACK_ICON: &str = "✓";

/// Tag types rendered as feature badges.
const BADGE_TAG_TYPES: &[&str] = &[
    "urn:tag:accessibility",
    "urn:tag:service_options",
    "urn:tag:payments",
    "urn:tag:amenity",
    "urn:tag:inclusivity",
];

/// Tag types folded into the descriptive sentence.
const DESCRIPTION_TAG_TYPES: &[&str] = &[
    "urn:tag:offerings",
    "urn:tag:service_options",
    "urn:tag:dining_options",
];

/// At most this many feature badges are shown.
const MAX_BADGES: usize = 6;

/// Rating assumed when the backend sends none or an unparseable one.
const DEFAULT_RATING: f64 = 4.0;

/// A five-slot star rating: full stars, an optional half star, the rest empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    /// Number of full stars (0-5)
    pub full: u8,
    /// Whether a half star follows the full stars
    pub half: bool,
    /// Number of empty slots
    pub empty: u8,
}

impl StarRating {
    /// Build from a numeric rating: full = floor, half when the fractional
    /// part is at least 0.5, always exactly five slots.
    pub fn from_rating(rating: f64) -> Self {
        let clamped = rating.clamp(0.0, 5.0);
        let full = clamped.floor() as u8;
        let half = full < 5 && clamped.fract() >= 0.5;
        Self {
            full,
            half,
            empty: 5 - full - u8::from(half),
        }
    }

    /// Render as exactly five glyphs.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.extend(std::iter::repeat_n('★', self.full as usize));
        if self.half {
            out.push('☆');
        }
        out.extend(std::iter::repeat_n('☆', self.empty as usize));
        out
    }
}

/// One feature badge: an icon plus the tag's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureBadge {
    /// Icon glyph from the fixed table
    pub icon: &'static str,
    /// Tag display name
    pub name: String,
}

/// Render-ready projection of one restaurant record. Recomputed on every
/// successful fetch; holds no state of its own.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayModel {
    /// Category emoji
    pub emoji: &'static str,
    /// Restaurant name
    pub name: String,
    /// Derived descriptive sentence
    pub description: String,
    /// Star breakdown
    pub stars: StarRating,
    /// Stars rendered as five glyphs
    pub star_string: String,
    /// "4.5 (321 reviews)" or just "4.5" when the count is unknown
    pub rating_label: String,
    /// Price tier text
    pub price_label: &'static str,
    /// Today's hours text
    pub hours_label: String,
    /// "1.0 miles away", when both coordinates are known
    pub distance_label: Option<String>,
    /// Street address, with a fallback placeholder
    pub address: String,
    /// Phone number, with a fallback placeholder
    pub phone: String,
    /// Website URL for the action button
    pub website: Option<String>,
    /// Directions link, when the venue coordinate is known
    pub directions_url: Option<String>,
    /// Hero image URL, preferred over the emoji when present
    pub image_url: Option<String>,
    /// Up to six feature badges
    pub feature_badges: Vec<FeatureBadge>,
}

/// Project a record into its display model.
///
/// `user` enables the distance label; `today` selects the hours entry.
pub fn project(record: &RestaurantRecord, user: Option<&Coordinate>, today: Weekday) -> DisplayModel {
    let properties = &record.properties;
    let rating = properties.business_rating.unwrap_or(DEFAULT_RATING);
    let stars = StarRating::from_rating(rating);

    DisplayModel {
        emoji: emoji_for(&record.tags, properties),
        name: record.name.clone(),
        description: description_for(properties, &record.tags),
        stars,
        star_string: stars.render(),
        rating_label: rating_label(rating, properties.review_count),
        price_label: price_label(properties.price_level),
        hours_label: hours_label(properties.hours.as_ref(), today),
        distance_label: distance_label(user, record.location.as_ref()),
        address: properties
            .address
            .clone()
            .unwrap_or_else(|| "Address not available".to_string()),
        phone: properties
            .phone
            .clone()
            .unwrap_or_else(|| "Phone not available".to_string()),
        website: properties.website.clone(),
        directions_url: record.location.as_ref().map(|l| {
            format!(
                "https://www.google.com/maps/dir/?api=1&destination={},{}",
                l.lat, l.lon
            )
        }),
        image_url: properties.image.as_ref().map(|i| i.url.clone()),
        feature_badges: feature_badges(&record.tags),
    }
}

/// Pick the emoji: first matching record tag in table order, then the first
/// `good_for` id, then the storefront glyph.
pub fn emoji_for(tags: &[Tag], properties: &RestaurantProperties) -> &'static str {
    for (tag_id, emoji) in TAG_EMOJI {
        if tags.iter().any(|t| t.tag_id == *tag_id) {
            return emoji;
        }
    }

    if let Some(good_for) = properties.good_for.first() {
        if let Some((_, emoji)) = TAG_EMOJI.iter().find(|(id, _)| *id == good_for.id) {
            return emoji;
        }
    }

    FALLBACK_EMOJI
}

/// Build the descriptive sentence from the primary `good_for` entry and up to
/// three offering/service/dining tags.
pub fn description_for(properties: &RestaurantProperties, tags: &[Tag]) -> String {
    let mut description = match properties.good_for.first() {
        Some(primary) => format!("A popular {} ", primary.name.to_lowercase()),
        None => "A great restaurant ".to_string(),
    };

    let features: Vec<String> = tags
        .iter()
        .filter(|t| DESCRIPTION_TAG_TYPES.contains(&t.tag_type.as_str()))
        .take(3)
        .map(|t| t.name.to_lowercase())
        .collect();

    if features.is_empty() {
        description.push_str("with great food and atmosphere.");
    } else {
        description.push_str(&format!("offering {}.", features.join(", ")));
    }

    description
}

/// "4.5 (321 reviews)", or just "4.5" when the backend sends no count.
pub fn rating_label(rating: f64, review_count: Option<u64>) -> String {
    match review_count {
        Some(count) => format!("{rating:.1} ({count} reviews)"),
        None => format!("{rating:.1}"),
    }
}

/// Price tier text. Anything outside 1-4 gets the moderate default.
pub fn price_label(price_level: Option<u8>) -> &'static str {
    match price_level {
        Some(1) => "Budget friendly",
        Some(3) => "Upscale dining",
        Some(4) => "Fine dining",
        _ => "Moderate pricing",
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Today's hours text: "Closed today", "Open today: 9:00 AM - 5:00 PM", or
/// "Hours not available" when the entry is missing or malformed.
pub fn hours_label(hours: Option<&HoursTable>, today: Weekday) -> String {
    const UNAVAILABLE: &str = "Hours not available";

    let Some(hours) = hours else {
        return UNAVAILABLE.to_string();
    };
    let Some(slots) = hours.get(weekday_name(today)) else {
        return UNAVAILABLE.to_string();
    };
    let Some(slot) = slots.first() else {
        return UNAVAILABLE.to_string();
    };

    if slot.closed {
        return "Closed today".to_string();
    }

    match (slot.opens.as_deref(), slot.closes.as_deref()) {
        (Some(opens), Some(closes)) => {
            match (format_time_12h(opens), format_time_12h(closes)) {
                (Some(opens), Some(closes)) => format!("Open today: {opens} - {closes}"),
                _ => UNAVAILABLE.to_string(),
            }
        }
        _ => UNAVAILABLE.to_string(),
    }
}

/// "T09:00" or "09:00" → "9:00 AM". Hour 0 is 12 AM; hour 12 stays 12 PM.
fn format_time_12h(raw: &str) -> Option<String> {
    let time = raw.strip_prefix('T').unwrap_or(raw);
    let (hours, minutes) = time.split_once(':')?;
    let hour24: u32 = hours.parse().ok()?;
    if hour24 > 23 || minutes.len() != 2 || minutes.parse::<u32>().ok()? > 59 {
        return None;
    }

    let hour12 = match hour24 {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    let ampm = if hour24 >= 12 { "PM" } else { "AM" };
    Some(format!("{hour12}:{minutes} {ampm}"))
}

/// "{:.1} miles away" when both ends are known.
pub fn distance_label(user: Option<&Coordinate>, venue: Option<&GeoPoint>) -> Option<String> {
    let user = user?;
    let venue = venue?;
    let miles = distance_miles(user, &Coordinate::new(venue.lat, venue.lon));
    Some(format!("{miles:.1} miles away"))
}

/// Up to six badges from accessibility/service/payment/amenity/inclusivity
/// tags, each mapped through the fixed icon table.
pub fn feature_badges(tags: &[Tag]) -> Vec<FeatureBadge> {
    tags.iter()
        .filter(|t| BADGE_TAG_TYPES.contains(&t.tag_type.as_str()))
        .take(MAX_BADGES)
        .map(|t| FeatureBadge {
            icon: FEATURE_ICONS
                .iter()
                .find(|(id, _)| *id == t.tag_id)
                .map_or(FALLBACK_ICON, |(_, icon)| icon),
            name: t.name.clone(),
        })
        .collect()
}
