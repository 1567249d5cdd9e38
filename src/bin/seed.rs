use adapter::database::connect_database_with;
use adapter::repository::{membership::MembershipRepositoryImpl, space::SpaceRepositoryImpl};
use anyhow::{Context, Result};
use kernel::model::membership::event::CreateMembership;
use kernel::model::space::event::CreateSpace;
use kernel::repository::{membership::MembershipRepository, space::SpaceRepository};
use serde::Deserialize;
use shared::config::AppConfig;

/// Catalog snapshot as shipped next to the binary. Replaces whatever is in
/// the `spaces` and `memberships` tables.
#[derive(Deserialize)]
struct CatalogSnapshot {
    spaces: Vec<SpaceSeed>,
    memberships: Vec<MembershipSeed>,
}

#[derive(Deserialize)]
struct SpaceSeed {
    name: String,
    location: String,
    price: f64,
    availability: bool,
    image_path: Option<String>,
}

impl From<SpaceSeed> for CreateSpace {
    fn from(value: SpaceSeed) -> Self {
        let SpaceSeed {
            name,
            location,
            price,
            availability,
            image_path,
        } = value;
        CreateSpace::new(name, location, price, availability, image_path)
    }
}

#[derive(Deserialize)]
struct MembershipSeed {
    name: String,
    price: f64,
    features: Option<String>,
}

impl From<MembershipSeed> for CreateMembership {
    fn from(value: MembershipSeed) -> Self {
        let MembershipSeed {
            name,
            price,
            features,
        } = value;
        CreateMembership::new(name, price, features)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/seed.json".into());
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read catalog snapshot {path}"))?;
    let snapshot: CatalogSnapshot =
        serde_json::from_str(&raw).context("catalog snapshot is not valid JSON")?;

    let app_config = AppConfig::new()?;
    let pool = connect_database_with(&app_config.database);

    let spaces: Vec<CreateSpace> = snapshot.spaces.into_iter().map(Into::into).collect();
    let memberships: Vec<CreateMembership> =
        snapshot.memberships.into_iter().map(Into::into).collect();
    let (space_count, membership_count) = (spaces.len(), memberships.len());

    SpaceRepositoryImpl::new(pool.clone())
        .replace_all(spaces)
        .await?;
    MembershipRepositoryImpl::new(pool)
        .replace_all(memberships)
        .await?;

    tracing::info!(
        spaces = space_count,
        memberships = membership_count,
        "catalog snapshot loaded from {path}"
    );

    Ok(())
}
