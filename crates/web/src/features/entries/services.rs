use storage::{
    Database,
    dto::entry::{
        DraftPickUpsert, EntryResponse, ParticipateMode, ParticipateResponse, ScoreUpsert,
        SubmitScoreRequest,
    },
    error::Result,
    models::Player,
    repository::{entry::EntryRepository, participant::ParticipantRepository, player::PlayerRepository},
};
use uuid::Uuid;

/// Player linked to an identity-service account
pub async fn linked_player(db: &Database, user_id: Uuid) -> Result<Option<Player>> {
    let repo = PlayerRepository::new(db);
    repo.find_by_user(user_id).await
}

pub async fn set_participation(
    db: &Database,
    week_id: Uuid,
    player_id: Uuid,
    participate: bool,
) -> Result<ParticipateResponse> {
    let repo = ParticipantRepository::new(db);

    if participate {
        let row = repo.join(week_id, player_id).await?;
        tracing::info!(%week_id, %player_id, "Player joined week");

        return Ok(ParticipateResponse {
            ok: true,
            mode: ParticipateMode::Joined,
            row,
        });
    }

    repo.leave(week_id, player_id).await?;
    tracing::info!(%week_id, %player_id, "Player left week");

    Ok(ParticipateResponse {
        ok: true,
        mode: ParticipateMode::Left,
        row: None,
    })
}

/// Record a week's score, replacing any earlier submission for the same player
pub async fn submit_score(db: &Database, request: SubmitScoreRequest) -> Result<EntryResponse> {
    let repo = EntryRepository::new(db);
    let row = ScoreUpsert::from(request);

    let entry = repo.upsert_score(&row).await?;
    tracing::info!(week_id = %row.week_id, player_id = %row.player_id, total = ?row.total, "Score submitted");

    Ok(EntryResponse { ok: true, entry })
}

pub async fn draft_pick(
    db: &Database,
    week_id: Uuid,
    player_id: Uuid,
    pro_id: String,
) -> Result<EntryResponse> {
    let repo = EntryRepository::new(db);
    let row = DraftPickUpsert {
        week_id,
        player_id,
        pga_golfer: pro_id,
    };

    let entry = repo.upsert_pick(&row).await?;
    tracing::info!(%week_id, %player_id, pro = %row.pga_golfer, "Pro drafted");

    Ok(EntryResponse { ok: true, entry })
}
