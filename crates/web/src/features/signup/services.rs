use storage::{
    Database,
    dto::player::{AuthUser, JoinMode, JoinRequest, JoinResponse, MeResponse, PlayerWrite},
    error::Result,
    repository::player::PlayerRepository,
};

/// Create the caller's player profile, or update it when one is already linked
pub async fn join(db: &Database, user: &AuthUser, request: &JoinRequest) -> Result<JoinResponse> {
    let repo = PlayerRepository::new(db);

    let write = PlayerWrite {
        name: request.clean_name(),
        handicap_index: request.handicap_index,
        user_id: None,
    };

    if let Some(existing) = repo.find_by_user(user.id).await? {
        let player = repo.update(existing.id, &write).await?;
        tracing::info!(player_id = %existing.id, "Player profile updated");

        return Ok(JoinResponse {
            ok: true,
            mode: JoinMode::Updated,
            player,
        });
    }

    let player = repo
        .create(&PlayerWrite {
            user_id: Some(user.id),
            ..write
        })
        .await?;
    tracing::info!(user_id = %user.id, "Player profile created");

    Ok(JoinResponse {
        ok: true,
        mode: JoinMode::Created,
        player,
    })
}

/// The caller and the player linked to them, if any
pub async fn me(db: &Database, user: AuthUser) -> Result<MeResponse> {
    let repo = PlayerRepository::new(db);
    let player = repo.find_by_user(user.id).await?;

    Ok(MeResponse { user, player })
}
