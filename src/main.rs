use flexi_logger::{AdaptiveFormat, Logger};
use hashset::collections::hash::HashSet;
use hashset::collections::traits::set::Set;

fn main() -> anyhow::Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?
        .log_to_stderr()
        .adaptive_format_for_stderr(
            match cfg!(debug_assertions) {
                true => AdaptiveFormat::WithThread,
                _    => AdaptiveFormat::Default
            })
        .start()?;

    let mut set = HashSet::new();
    set.add([1, 2, 3]);
    log::info!("added 1, 2, 3: {set}");

    set.remove_all(&[2]);
    log::info!("removed 2: {set}");
    log::info!("contains 1 and 3: {}", set.contains_all(&[1, 3]));
    log::info!("contains 1 and 2: {}", set.contains_all(&[1, 2]));

    let a: HashSet<u32> = [1, 2, 3].into_iter().collect();
    let b: HashSet<u32> = [2, 3, 4].into_iter().collect();
    log::info!("a intersects b: {}", a.intersects(&b));
    log::info!("a ∩ b: {}", a.intersection(&b));
    log::info!("a ∪ b: {}", a.union(&b));
    log::info!("a \\ b: {}", a.subtract(&b));
    log::info!("b \\ a: {}", b.subtract(&a));

    set.clear();
    log::info!("cleared: empty = {}, size = {}", set.is_empty(), set.len());

    Ok(())
}
