//! Phases 2-4: the conversion machine (landing page blueprints).
//!
//! One blueprint per avatar. Copy is chosen by the avatar's [`PageAngle`],
//! never by array position or name text.

use serde::{Deserialize, Serialize};

use super::avatar::{AvatarProfile, PageAngle};
use crate::intel::Intel;

/// Enemy every page positions the business against.
pub const COMMON_ENEMY: &str = "Hidden Fees & Vague Promises";

/// Location used in headlines when the crowd names none.
const DEFAULT_AREA: &str = "Your Area";

/// Content plan for one persona-targeted page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageBlueprint {
    pub archetype: super::avatar::Archetype,
    pub avatar_name: String,
    /// Path with exactly one leading `/`.
    pub slug: String,
    pub headlines: Vec<String>,
    pub interest_hook: String,
    pub common_enemy: String,
    pub benefits: Vec<String>,
    /// Left empty for real customer quotes.
    pub testimonials: Vec<String>,
    pub cta: String,
}

/// Derive one blueprint per avatar, in avatar order.
pub fn generate_landing_pages(intel: &Intel, avatars: &[AvatarProfile]) -> Vec<LandingPageBlueprint> {
    let base_slug = slugify(&intel.bait);
    let multi = avatars.len() > 1;

    avatars
        .iter()
        .map(|avatar| {
            let slug = if multi {
                format!("/{base_slug}-{}", avatar_slug_fragment(&avatar.name))
            } else {
                format!("/{base_slug}")
            };
            let copy = page_copy(intel, avatar.archetype.angle());

            LandingPageBlueprint {
                archetype: avatar.archetype,
                avatar_name: avatar.name.clone(),
                slug,
                headlines: copy.headlines,
                interest_hook: copy.interest_hook,
                common_enemy: COMMON_ENEMY.to_owned(),
                benefits: copy.benefits,
                testimonials: Vec::new(),
                cta: copy.cta,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

/// Lowercase `text`, collapse every run of characters outside `[a-z0-9]`
/// into one hyphen, and trim hyphens from both ends.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Slug suffix distinguishing one avatar's page from another's.
///
/// Takes the text inside the first parenthetical of the name, lowercased
/// with double quotes removed (`Avatar 2 (The "Skeptic")` gives
/// `the skeptic`). Names without a usable parenthetical are slugified whole.
pub fn avatar_slug_fragment(name: &str) -> String {
    let inner = name
        .split_once('(')
        .map(|(_, rest)| rest.split(')').next().unwrap_or(rest))
        .map(|inner| inner.to_lowercase().replace('"', ""))
        .filter(|inner| !inner.is_empty());

    match inner {
        Some(fragment) => fragment,
        None => slugify(name),
    }
}

// ---------------------------------------------------------------------------
// Copy
// ---------------------------------------------------------------------------

struct PageCopy {
    headlines: Vec<String>,
    interest_hook: String,
    benefits: Vec<String>,
    cta: String,
}

fn page_copy(intel: &Intel, angle: PageAngle) -> PageCopy {
    let area = intel.location().unwrap_or(DEFAULT_AREA);
    let Intel {
        hungry_crowd: crowd,
        burning_pain: pain,
        bait,
        usp,
        business_name: business,
        ..
    } = intel;

    match angle {
        PageAngle::Urgency => PageCopy {
            headlines: vec![
                format!("Finally, An End to \"{pain}\" in {area}."),
                format!("Get Your {bait} Today And Stop Worrying About [Pain Point]."),
                format!("Fast Relief for {crowd}: Claim Your {bait} Now."),
            ],
            interest_hook: format!(
                "That nagging feeling of '{pain}' doesn't have to be your reality. We understand \
                 the stress, and we're here to end it without the usual runaround from the big guys."
            ),
            benefits: vec![
                "Experience Immediate Peace of Mind: Know exactly what's wrong, fast.".to_owned(),
                "Stop Wasting Time: Our process is designed for speed and efficiency.".to_owned(),
                "Get Back to Your Life: Solve this problem and move on.".to_owned(),
                "Transparent Pricing: No surprises, just the solution you need.".to_owned(),
                format!("Guaranteed Callback: We respect your time. {usp}"),
            ],
            cta: "Get My FREE Inspection & Quote!".to_owned(),
        },
        PageAngle::Trust => PageCopy {
            headlines: vec![
                format!("The Most Trusted {business} in {area}. Here's Proof."),
                format!("Tired of Shady Mechanics? Get an Honest Opinion with Our {bait}."),
                "Our Iron-Clad Guarantee: You'll Love Our Service or It's FREE.".to_owned(),
            ],
            interest_hook: "You've heard the promises before. You're right to be skeptical. \
                            That's why we put our guarantee front and center and let our \
                            reputation speak for itself."
                .to_owned(),
            benefits: vec![
                "Total Transparency: We show you the problem, explain the solution, and quote \
                 before any work begins."
                    .to_owned(),
                format!("Iron-Clad Guarantee: Backed by our commitment to {usp}."),
                format!("See Our Reviews: Loved by hundreds of {crowd}."),
                "Certified & Vetted: Our team is the best in the business.".to_owned(),
                "No Upselling, Ever: We solve your problem, not sell you services you don't need."
                    .to_owned(),
            ],
            cta: "Get My HONEST Bilan!".to_owned(),
        },
        PageAngle::Value => PageCopy {
            headlines: vec![
                format!(
                    "Maximize Your Savings: Get a {bait} AND a [Bonus Service] for One Low Price."
                ),
                format!(
                    "The Smart Choice for {crowd}: Bundle, Save, and Secure Your Peace of Mind."
                ),
                format!("Why Just Fix One Thing? Get a Complete Check-Up With Your {bait}."),
            ],
            interest_hook: format!(
                "Solving one problem is good. Preventing the next one is better. Smart {crowd} \
                 know that bundling services is the key to long-term value and savings."
            ),
            benefits: vec![
                "Unbeatable Value: Get more for your money, guaranteed.".to_owned(),
                "Long-Term Savings: Prevent future costly repairs by addressing issues today."
                    .to_owned(),
                "One-Stop-Shop: Save time and hassle by getting everything done at once."
                    .to_owned(),
                "Comprehensive Report: Understand the full picture of your [Asset, e.g., \
                 'Vehicle's Health']."
                    .to_owned(),
                "Exclusive Offer: This bundle is not available anywhere else.".to_owned(),
            ],
            cta: "Get My BUNDLE DEAL!".to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::StrategicChoice;
    use crate::plan::avatar::{Archetype, generate_avatars};

    fn intel(bait: &str, choice: StrategicChoice) -> Intel {
        Intel {
            hungry_crowd: "Homeowners in Terrebonne, QC.".to_owned(),
            burning_pain: "brakes are grinding".to_owned(),
            bait: bait.to_owned(),
            usp: "Honest mechanics".to_owned(),
            business_name: "Garage XYZ".to_owned(),
            contact_number: "555-123-4567".to_owned(),
            primary_language: "French-first".to_owned(),
            strategic_choice: choice,
        }
    }

    fn pages(intel: &Intel) -> Vec<LandingPageBlueprint> {
        generate_landing_pages(intel, &generate_avatars(intel))
    }

    // -- slugs --

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(
            slugify("Free Brake Inspection + 10% Off Parts"),
            "free-brake-inspection-10-off-parts"
        );
    }

    #[test]
    fn slugify_trims_edge_hyphens() {
        assert_eq!(slugify("  --Hello, World!--  "), "hello-world");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugify_treats_accents_as_separators() {
        assert_eq!(slugify("Inspection Gratuite Été"), "inspection-gratuite-t");
    }

    #[test]
    fn fragment_from_parenthetical() {
        assert_eq!(avatar_slug_fragment("Avatar 1 (The \"In-Pain\")"), "the in-pain");
        assert_eq!(avatar_slug_fragment("Avatar 2 (The \"Skeptic\")"), "the skeptic");
    }

    #[test]
    fn fragment_without_parenthetical_slugifies_name() {
        assert_eq!(avatar_slug_fragment("Weekend Warrior"), "weekend-warrior");
        assert_eq!(avatar_slug_fragment("Empty ()"), "empty");
    }

    #[test]
    fn single_slug_has_no_fragment() {
        let lps = pages(&intel(
            "Free Brake Inspection + 10% Off Parts",
            StrategicChoice::Single,
        ));
        assert_eq!(lps.len(), 1);
        assert_eq!(lps[0].slug, "/free-brake-inspection-10-off-parts");
    }

    #[test]
    fn multi_slugs_carry_fragment() {
        let lps = pages(&intel("Free Brake Inspection", StrategicChoice::Multi));
        let slugs: Vec<&str> = lps.iter().map(|lp| lp.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "/free-brake-inspection-the in-pain",
                "/free-brake-inspection-the skeptic",
                "/free-brake-inspection-the bundler",
            ]
        );
    }

    // -- copy --

    #[test]
    fn single_uses_urgency_copy() {
        let lps = pages(&intel("Free Brake Inspection", StrategicChoice::Single));
        let lp = &lps[0];
        assert_eq!(
            lp.headlines[0],
            "Finally, An End to \"brakes are grinding\" in Terrebonne, QC.."
        );
        assert_eq!(lp.cta, "Get My FREE Inspection & Quote!");
        assert_eq!(lp.benefits[4], "Guaranteed Callback: We respect your time. Honest mechanics");
    }

    #[test]
    fn every_page_has_fixed_shape() {
        for choice in [StrategicChoice::Single, StrategicChoice::Multi] {
            for lp in pages(&intel("Free Brake Inspection", choice)) {
                assert_eq!(lp.headlines.len(), 3);
                assert_eq!(lp.benefits.len(), 5);
                assert!(lp.testimonials.is_empty());
                assert_eq!(lp.common_enemy, COMMON_ENEMY);
            }
        }
    }

    #[test]
    fn skeptic_routes_to_trust_regardless_of_order() {
        let intel = intel("Free Brake Inspection", StrategicChoice::Multi);
        let mut avatars = generate_avatars(&intel);
        avatars.reverse();
        let lps = generate_landing_pages(&intel, &avatars);
        let skeptic = lps
            .iter()
            .find(|lp| lp.archetype == Archetype::Skeptic)
            .expect("skeptic page present");
        assert_eq!(skeptic.cta, "Get My HONEST Bilan!");
        assert_eq!(
            skeptic.headlines[0],
            "The Most Trusted Garage XYZ in Terrebonne, QC.. Here's Proof."
        );
        assert_eq!(lps[0].archetype, Archetype::Bundler);
        assert_eq!(lps[0].cta, "Get My BUNDLE DEAL!");
    }

    #[test]
    fn missing_location_defaults_to_your_area() {
        let mut intel = intel("Free Brake Inspection", StrategicChoice::Single);
        intel.hungry_crowd = "Busy commuters".to_owned();
        let lps = pages(&intel);
        assert!(lps[0].headlines[0].ends_with(" in Your Area."));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let lps = pages(&intel("Free Brake Inspection", StrategicChoice::Single));
        let json = serde_json::to_value(&lps[0]).unwrap();
        assert!(json.get("avatarName").is_some());
        assert!(json.get("interestHook").is_some());
        assert!(json.get("commonEnemy").is_some());
        assert_eq!(json["archetype"], "primary");
    }
}
