use crate::error::AppError;

pub const LEVEL_COUNT: i64 = 5;
const MAX_DISPLAY_NAME_LEN: usize = 32;

pub fn validate_level(level: i64) -> Result<(), AppError> {
    if level < 1 || level > LEVEL_COUNT {
        Err(AppError::BadRequest(format!("Invalid level: {}", level)))
    } else {
        Ok(())
    }
}

pub fn validate_strokes(strokes: i64) -> Result<(), AppError> {
    if strokes < 1 {
        Err(AppError::BadRequest("Strokes must be positive".into()))
    } else {
        Ok(())
    }
}

pub fn validate_player_id(player_id: &str) -> Result<(), AppError> {
    if player_id.trim().is_empty() {
        Err(AppError::BadRequest("Player id is required".into()))
    } else {
        Ok(())
    }
}

pub fn validate_display_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "Anonymous".to_string()
    } else {
        trimmed.chars().take(MAX_DISPLAY_NAME_LEN).collect()
    }
}
