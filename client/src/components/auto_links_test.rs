use super::*;

#[test]
fn fixed_height_players_use_pixel_height() {
    let embed = classify_embed("https://open.spotify.com/track/abc");
    assert_eq!(frame_style(&embed), "width: 100%; height: 152px; border: 0");
}

#[test]
fn video_players_keep_widescreen_ratio() {
    let embed = classify_embed("https://youtu.be/abc123");
    assert_eq!(frame_style(&embed), "width: 100%; aspect-ratio: 16 / 9; border: 0");
}
