use anyhow::Result;
use chanmerge_core::channel::Channel;
use clap::Args;

#[derive(Args)]
pub struct ChannelsArgs {}

pub fn run(_args: &ChannelsArgs) -> Result<()> {
    println!("{:<6} {:<5} {:<8} channel", "code", "tag", "token");
    for channel in Channel::PRIORITY {
        println!(
            "{:<6} {:<5} {:<8} {:?}",
            channel.code(),
            channel.tag(),
            channel.token(),
            channel
        );
    }
    println!();
    println!("g/y and b/c share a composite slot and are mutually exclusive.");
    Ok(())
}
