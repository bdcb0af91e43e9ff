//! One row of the dashboard episode list.

use leptos::prelude::*;

use podcast::Episode;

/// Episode title, status and duration; ready episodes get an audio player.
#[component]
pub fn EpisodeItem(episode: Episode) -> impl IntoView {
    let playable = episode.is_playable();
    let src = crate::util::config::episode_audio_url(episode.id);
    let status = episode.status.label();
    let duration = episode.duration_label();

    view! {
        <li class="episode-item">
            <b class="episode-item__title">{episode.title}</b>
            " · "
            <span class=format!("episode-item__status episode-item__status--{status}")>{status}</span>
            <span class="episode-item__duration">{duration}</span>
            <Show when=move || playable>
                <audio class="episode-item__player" controls=true src=src.clone()></audio>
            </Show>
        </li>
    }
}
