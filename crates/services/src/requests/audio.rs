use async_trait::async_trait;
use streetcode_core::types::DbId;
use streetcode_db::models::audio::{Audio, NewAudio};

use crate::blob::BlobError;
use crate::context::AppContext;
use crate::dispatch::Request;
use crate::dto::media::{AudioDto, AudioFileCreateDto, BlobPayload};
use crate::error::{not_found, persistence, ServiceResult, WriteResultExt};

async fn with_payload(ctx: &AppContext, audio: Audio) -> ServiceResult<AudioDto> {
    let base64 = ctx.blobs.find_file_as_base64(&audio.blob_name).await?;
    Ok(AudioDto {
        base64: Some(base64),
        ..AudioDto::from(audio)
    })
}

/// Listing variant: a missing blob leaves `base64` empty instead of failing.
async fn with_optional_payload(ctx: &AppContext, audio: Audio) -> ServiceResult<AudioDto> {
    match ctx.blobs.find_file_as_base64(&audio.blob_name).await {
        Ok(base64) => Ok(AudioDto {
            base64: Some(base64),
            ..AudioDto::from(audio)
        }),
        Err(BlobError::NotFound(_)) => {
            tracing::warn!(audio_id = audio.id, blob = %audio.blob_name, "Audio blob is missing");
            Ok(AudioDto::from(audio))
        }
        Err(err) => Err(err.into()),
    }
}

async fn find_audio(ctx: &AppContext, id: DbId) -> ServiceResult<Audio> {
    match ctx.repos.audios().find_by_id(id).await? {
        Some(audio) => Ok(audio),
        None => Err(not_found(format!(
            "Cannot find an audio with corresponding id: {id}"
        ))),
    }
}

pub struct GetAllAudios;

#[async_trait]
impl Request for GetAllAudios {
    type Response = Vec<AudioDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Vec<AudioDto>> {
        let audios = ctx.repos.audios().list_all().await?;
        let mut dtos = Vec::with_capacity(audios.len());
        for audio in audios {
            dtos.push(with_optional_payload(ctx, audio).await?);
        }
        Ok(dtos)
    }
}

pub struct GetAudioById {
    pub id: DbId,
}

#[async_trait]
impl Request for GetAudioById {
    type Response = AudioDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<AudioDto> {
        let audio = find_audio(ctx, self.id).await?;
        with_payload(ctx, audio).await
    }
}

/// The streetcode's audio, or `None` when it has none.
pub struct GetAudioByStreetcodeId {
    pub streetcode_id: DbId,
}

#[async_trait]
impl Request for GetAudioByStreetcodeId {
    type Response = Option<AudioDto>;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<Option<AudioDto>> {
        let id = self.streetcode_id;
        let Some(streetcode) = ctx.repos.streetcodes().find_by_id(id).await? else {
            return Err(not_found(format!(
                "Cannot find a streetcode with corresponding id: {id}"
            )));
        };
        let Some(audio_id) = streetcode.audio_id else {
            return Ok(None);
        };
        match ctx.repos.audios().find_by_id(audio_id).await? {
            Some(audio) => Ok(Some(with_payload(ctx, audio).await?)),
            None => Ok(None),
        }
    }
}

/// Raw audio bytes for streaming.
pub struct GetBaseAudio {
    pub id: DbId,
}

#[async_trait]
impl Request for GetBaseAudio {
    type Response = BlobPayload;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<BlobPayload> {
        let audio = find_audio(ctx, self.id).await?;
        let bytes = ctx.blobs.find_file(&audio.blob_name).await?;
        Ok(BlobPayload {
            bytes,
            mime_type: audio.mime_type,
        })
    }
}

pub struct CreateAudio {
    pub audio: AudioFileCreateDto,
}

#[async_trait]
impl Request for CreateAudio {
    type Response = AudioDto;

    async fn handle(self, ctx: &AppContext) -> ServiceResult<AudioDto> {
        let dto = self.audio;
        let name = dto.title.clone().unwrap_or_default();
        let blob_name = ctx
            .blobs
            .save_file(&dto.base_format, &name, &dto.extension)
            .await?;

        let input = NewAudio {
            title: dto.title,
            blob_name,
            mime_type: dto.mime_type,
        };
        let audio = ctx
            .repos
            .audios()
            .create(&input)
            .await
            .or_persistence("Failed to create an audio")?;

        tracing::info!(audio_id = audio.id, blob = %audio.blob_name, "Audio created");
        Ok(AudioDto {
            base64: Some(dto.base_format),
            ..AudioDto::from(audio)
        })
    }
}

/// Remove the audio row, then its blob.
pub struct DeleteAudio {
    pub id: DbId,
}

#[async_trait]
impl Request for DeleteAudio {
    type Response = ();

    async fn handle(self, ctx: &AppContext) -> ServiceResult<()> {
        let audio = find_audio(ctx, self.id).await?;

        if ctx.repos.audios().delete(audio.id).await? == 0 {
            return Err(persistence("Failed to delete an audio"));
        }

        match ctx.blobs.delete_file(&audio.blob_name).await {
            Ok(()) => {}
            Err(BlobError::NotFound(name)) => {
                tracing::warn!(blob = %name, "Audio blob was already gone");
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(audio_id = audio.id, "Audio deleted");
        Ok(())
    }
}
