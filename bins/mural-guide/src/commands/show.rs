//! Show command

use super::{print_json, Context, SUCCESS};
use muralmap_cli::output::{format_position, Status};
use muralmap_core::lookup::{find_by_name, MuralDetail};
use muralmap_core::Error;

pub fn run(ctx: &Context, name: &str) -> anyhow::Result<u8> {
    muralmap_telemetry::timed_span!("command.show");

    let (index, record) = find_by_name(ctx.catalog.records(), name).ok_or_else(|| Error::mural_not_found(name))?;
    let detail = MuralDetail::new(index, record, ctx.image_dir());

    if ctx.json {
        print_json(&detail)?;
        return Ok(SUCCESS);
    }

    print_detail(&detail);
    Ok(SUCCESS)
}

/// Text rendering shared with the assistant's info reply
pub fn print_detail(detail: &MuralDetail) {
    Status::header(&detail.name);
    Status::detail("Location", &detail.location);
    Status::detail("City", detail.city.label());
    if let Some(artist) = &detail.artist {
        Status::detail("Artist", artist);
    }
    if let Some(status) = &detail.status {
        Status::detail("Status", status);
    }
    match (&detail.coordinate, &detail.dms) {
        (Some(position), Some(dms)) => {
            Status::detail("Position", &format_position(position.latitude, position.longitude));
            Status::detail("DMS", dms);
        }
        _ => Status::detail("Position", "no usable coordinates"),
    }
    if let Some(description) = &detail.description {
        println!();
        println!("    {}", description);
    }

    if detail.images.is_empty() {
        Status::detail("Images", "none");
    } else {
        Status::subheader("Images");
        for path in &detail.images {
            println!("    {}", path);
        }
    }
}
