use super::*;
use crate::autojoin::store;

pub(crate) fn only_command(ctx: &Context) -> CommandResult {
    if wants_all(ctx) {
        for server in ctx.host.servers() {
            if !server.connected {
                debug!("skipping {}: not connected", server.name);
                continue;
            }
            close_non_primary(ctx, &server);
        }
        return Ok(());
    }

    let server = current_server(ctx, "only")?;
    close_non_primary(ctx, &server);
    Ok(())
}

/// Closes every open channel buffer that is not in the server's list.
/// The list itself is never touched.
fn close_non_primary(ctx: &Context, server: &Server) {
    let entry = store::load(&*ctx.host, &server.name);
    for open in ctx.host.open_channels(&server.name) {
        if !entry.contains(&open.name) {
            ctx.request(Request::Close {
                buffer: open.buffer,
            });
        }
    }
}
