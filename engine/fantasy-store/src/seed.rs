//! Demo seed data for the practice deployment and integration tests

use crate::store::FantasyStore;
use crate::Result;
use fantasy_core::{Competition, CompetitionId, CompetitionStatus, Owner, OwnerId, Player, RosterId};
use tracing::info;

/// Identifiers of the seeded entities, for wiring up callers
#[derive(Debug, Clone)]
pub struct DemoSeed {
    pub competition_id: CompetitionId,
    pub owner_ids: Vec<OwnerId>,
    pub roster_id: RosterId,
}

/// Seed a store with a grandmaster pool, demo owners, and one active
/// competition with an empty roster for the first owner
pub async fn seed_demo_data(store: &dyn FantasyStore) -> Result<DemoSeed> {
    let grandmasters = [
        ("Magnus Carlsen", 2830, 50_000_000),
        ("Fabiano Caruana", 2790, 45_000_000),
        ("Ding Liren", 2780, 43_000_000),
        ("Ian Nepomniachtchi", 2770, 42_000_000),
        ("Hikaru Nakamura", 2775, 40_000_000),
        ("Alireza Firouzja", 2760, 38_000_000),
        ("Wesley So", 2755, 35_000_000),
        ("Levon Aronian", 2745, 33_000_000),
        ("Anish Giri", 2750, 32_000_000),
        ("Maxime Vachier-Lagrave", 2740, 30_000_000),
        ("Viswanathan Anand", 2735, 28_000_000),
        ("Richard Rapport", 2720, 25_000_000),
        ("Shakhriyar Mamedyarov", 2730, 24_000_000),
        ("Teimour Radjabov", 2715, 23_000_000),
        ("Sergey Karjakin", 2710, 22_000_000),
    ];

    for (index, (name, rating, base_price)) in grandmasters.iter().enumerate() {
        let id = index as u32 + 1;
        store.insert_player(Player::new(id, *name, *rating, *base_price)).await?;
    }

    let owners = ["ChessMaster", "TacticKing", "EndgameExpert"];
    let mut owner_ids = Vec::new();
    for (index, name) in owners.iter().enumerate() {
        let id = index as i64 + 1;
        store.insert_owner(Owner::new(id, *name)).await?;
        owner_ids.push(id);
    }

    let competition_id = 1;
    store
        .insert_competition(Competition {
            id: competition_id,
            name: "Tata Steel Chess Tournament".to_string(),
            status: CompetitionStatus::Active,
        })
        .await?;

    let roster_id = store.insert_roster(owner_ids[0], competition_id).await?;

    info!(
        players = grandmasters.len(),
        owners = owners.len(),
        "seeded demo data for competition {competition_id}"
    );

    Ok(DemoSeed { competition_id, owner_ids, roster_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use fantasy_core::STARTING_BUDGET;

    #[tokio::test]
    async fn test_seed_populates_store() {
        let store = MemoryStore::new();
        let seed = seed_demo_data(&store).await.unwrap();

        assert_eq!(store.players().await.unwrap().len(), 15);
        assert_eq!(store.owners().await.unwrap().len(), 3);
        assert_eq!(store.active_competitions().await.unwrap().len(), 1);

        let owner = store.owner(seed.owner_ids[0]).await.unwrap();
        assert_eq!(owner.budget, STARTING_BUDGET);

        let roster = store.roster(seed.roster_id).await.unwrap();
        assert!(roster.player_ids.is_empty());
    }
}
