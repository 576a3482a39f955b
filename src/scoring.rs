//! Shortlist cleaning, feature engineering, and the weighted scoring model
//!
//! Each shortlisted player is scored as
//! `avg_rating + TROPHY_BONUS * trophies + AWARDS_BONUS * awards`,
//! where trophies and awards are counts of the delimiter-separated items in
//! the source cells. Only players in the top five European leagues are
//! eligible; rows whose rating cannot be read as a number are dropped.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::data::model::{ShortlistEntry, WinnerRecord};
use crate::error::{Error, Result};

/// Score bonus per major trophy won in the season
pub const TROPHY_BONUS: f64 = 2.0;
/// Score bonus per individual award won in the season
pub const AWARDS_BONUS: f64 = 1.5;

/// Leagues whose players are eligible for scoring
pub const TOP_FIVE_LEAGUES: [&str; 5] = [
    "Premier League",
    "La Liga",
    "Serie A",
    "Bundesliga",
    "Ligue 1",
];

/// The award was not presented in 2020; the row is a placeholder.
const NOT_AWARDED_YEAR: i32 = 2020;

/// Count delimiter-separated items in a raw cell.
///
/// An absent cell, a whitespace-only cell, and the em-dash placeholder all
/// count 0. A non-empty cell without the delimiter counts 1.
pub fn count_items(text: Option<&str>, delimiter: &str) -> u32 {
    match text {
        None => 0,
        Some(s) => {
            let s = s.trim();
            if s.is_empty() || s == "—" {
                0
            } else {
                s.split(delimiter).count() as u32
            }
        }
    }
}

/// Extract the league from a club cell such as `Real Madrid (La Liga)`.
///
/// The first parenthetical is taken; if it holds a comma-separated list
/// (`(Premier League, England)`), only the first element counts.
pub fn extract_league(club: &str) -> Option<String> {
    static LEAGUE_RE: OnceLock<Regex> = OnceLock::new();
    let re = LEAGUE_RE.get_or_init(|| {
        Regex::new(r"\((.*?)\)").expect("extract_league: invalid regex")
    });

    let captured = re.captures(club)?.get(1)?.as_str();
    let league = captured.split(',').next().unwrap_or("").trim();
    if league.is_empty() {
        None
    } else {
        Some(league.to_string())
    }
}

fn parse_rating(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
}

/// A past winner with derived trophy and award counts.
#[derive(Debug, Clone, Serialize)]
pub struct PastWinner {
    pub year: i32,
    pub player: String,
    pub club: Option<String>,
    pub trophies: u32,
    pub awards: u32,
}

/// Derive per-year features from the winners table.
///
/// The 2020 placeholder row (award not presented) is dropped.
pub fn winner_history(winners: &[WinnerRecord]) -> Vec<PastWinner> {
    winners
        .iter()
        .filter(|w| w.year != NOT_AWARDED_YEAR)
        .map(|w| PastWinner {
            year: w.year,
            player: w.player.clone(),
            club: w.club.clone(),
            trophies: count_items(w.major_club_trophies.as_deref(), ", "),
            awards: count_items(w.individual_awards.as_deref(), ", "),
        })
        .collect()
}

/// A scored shortlist candidate.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub player: String,
    pub club: String,
    pub league: String,
    pub avg_rating: f64,
    pub trophies: u32,
    pub awards: u32,
    pub score: f64,
}

/// The ranked shortlist, best candidate first. Never empty.
#[derive(Debug, Clone)]
pub struct Ranking {
    pub candidates: Vec<Candidate>,
}

impl Ranking {
    /// The predicted winner: the top-ranked candidate.
    pub fn winner(&self) -> &Candidate {
        &self.candidates[0]
    }
}

/// Clean the shortlist, score every eligible candidate, and rank them.
///
/// Dropped rows (unreadable rating, no league parenthetical, league outside
/// the top five) are not errors. An empty result is: no prediction can be
/// made from it.
pub fn rank_shortlist(shortlist: &[ShortlistEntry]) -> Result<Ranking> {
    let mut candidates: Vec<Candidate> = shortlist
        .iter()
        .filter_map(|entry| {
            let avg_rating = parse_rating(entry.avg_rating.as_deref())?;
            let league = extract_league(&entry.club)?;
            if !TOP_FIVE_LEAGUES.contains(&league.as_str()) {
                return None;
            }
            let trophies = count_items(entry.major_trophies.as_deref(), ", ");
            let awards = count_items(entry.individual_awards.as_deref(), "; ");
            let score =
                avg_rating + f64::from(trophies) * TROPHY_BONUS + f64::from(awards) * AWARDS_BONUS;
            Some(Candidate {
                player: entry.player.clone(),
                club: entry.club.clone(),
                league,
                avg_rating,
                trophies,
                awards,
                score,
            })
        })
        .collect();

    if candidates.is_empty() {
        return Err(Error::Prediction(
            "No eligible candidates after cleaning and league filtering".to_string(),
        ));
    }

    // Stable sort: tied scores keep shortlist file order
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(Ranking { candidates })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player: &str, club: &str, rating: &str, trophies: &str, awards: &str) -> ShortlistEntry {
        ShortlistEntry {
            player: player.to_string(),
            club: club.to_string(),
            avg_rating: Some(rating.to_string()),
            major_trophies: Some(trophies.to_string()),
            individual_awards: Some(awards.to_string()),
        }
    }

    #[test]
    fn test_count_items_empty_and_placeholder() {
        assert_eq!(count_items(None, ", "), 0);
        assert_eq!(count_items(Some(""), ", "), 0);
        assert_eq!(count_items(Some("   "), ", "), 0);
        assert_eq!(count_items(Some("—"), ", "), 0);
    }

    #[test]
    fn test_count_items_single_and_multiple() {
        assert_eq!(count_items(Some("La Liga"), ", "), 1);
        assert_eq!(count_items(Some("La Liga, Copa del Rey, Supercopa"), ", "), 3);
        // Delimiter mismatch leaves the cell as one item
        assert_eq!(count_items(Some("Award A; Award B"), ", "), 1);
        assert_eq!(count_items(Some("Award A; Award B"), "; "), 2);
    }

    #[test]
    fn test_extract_league() {
        assert_eq!(
            extract_league("Real Madrid (La Liga)").as_deref(),
            Some("La Liga")
        );
        assert_eq!(
            extract_league("Liverpool (Premier League, England)").as_deref(),
            Some("Premier League")
        );
        assert_eq!(extract_league("Al-Nassr"), None);
        assert_eq!(extract_league("Somewhere ()"), None);
    }

    #[test]
    fn test_winner_history_drops_2020() {
        let winners = vec![
            WinnerRecord {
                year: 2019,
                player: "Lionel Messi".to_string(),
                club: Some("Barcelona".to_string()),
                major_club_trophies: Some("La Liga".to_string()),
                individual_awards: Some("Pichichi, European Golden Shoe".to_string()),
            },
            WinnerRecord {
                year: 2020,
                player: "Not awarded".to_string(),
                club: None,
                major_club_trophies: Some("—".to_string()),
                individual_awards: Some("—".to_string()),
            },
        ];

        let history = winner_history(&winners);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].year, 2019);
        assert_eq!(history[0].trophies, 1);
        assert_eq!(history[0].awards, 2);
    }

    #[test]
    fn test_rank_shortlist_scores_and_orders() {
        let shortlist = vec![
            entry(
                "Player A",
                "Club A (Premier League)",
                "7.5",
                "FA Cup",
                "Award One; Award Two",
            ),
            entry(
                "Player B",
                "Club B (La Liga)",
                "8.0",
                "La Liga, Copa del Rey",
                "Award One",
            ),
        ];

        let ranking = rank_shortlist(&shortlist).unwrap();
        // A: 7.5 + 1*2.0 + 2*1.5 = 12.5;  B: 8.0 + 2*2.0 + 1*1.5 = 13.5
        assert_eq!(ranking.winner().player, "Player B");
        assert!((ranking.candidates[0].score - 13.5).abs() < 1e-9);
        assert!((ranking.candidates[1].score - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_rank_shortlist_drops_bad_rating_and_foreign_league() {
        let shortlist = vec![
            entry("No Rating", "Club (Serie A)", "N/A", "", ""),
            entry("Wrong League", "Club (Saudi Pro League)", "9.9", "", ""),
            entry("No League", "Clubless", "9.9", "", ""),
            entry("Eligible", "Club (Bundesliga)", "7.0", "", ""),
        ];

        let ranking = rank_shortlist(&shortlist).unwrap();
        assert_eq!(ranking.candidates.len(), 1);
        assert_eq!(ranking.winner().player, "Eligible");
    }

    #[test]
    fn test_rank_shortlist_empty_is_error() {
        let shortlist = vec![entry("Nobody", "Club (Elsewhere)", "8.0", "", "")];
        let result = rank_shortlist(&shortlist);
        assert!(matches!(result, Err(Error::Prediction(_))));
    }

    #[test]
    fn test_rank_shortlist_ties_keep_input_order() {
        let shortlist = vec![
            entry("First In File", "Club (Ligue 1)", "7.0", "", ""),
            entry("Second In File", "Club (Serie A)", "7.0", "", ""),
        ];

        let ranking = rank_shortlist(&shortlist).unwrap();
        assert_eq!(ranking.candidates[0].player, "First In File");
        assert_eq!(ranking.candidates[1].player, "Second In File");
    }

    #[test]
    fn test_missing_cells_score_zero_bonus() {
        let shortlist = vec![ShortlistEntry {
            player: "Bare".to_string(),
            club: "Club (La Liga)".to_string(),
            avg_rating: Some("6.8".to_string()),
            major_trophies: None,
            individual_awards: None,
        }];

        let ranking = rank_shortlist(&shortlist).unwrap();
        let c = ranking.winner();
        assert_eq!(c.trophies, 0);
        assert_eq!(c.awards, 0);
        assert!((c.score - 6.8).abs() < 1e-9);
    }
}
