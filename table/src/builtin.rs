//! Built-in command table modelled on the `btrfs` tool.
//!
//! Usage descriptions are written in the raw positional line format and
//! decoded when the table is built.

use cmdhelp_core::{
    CommandFlags, CommandGroup, CommandNode, CommandTable, INSERT_FORMAT, UsageError, optline,
};
use tracing::debug;

const SUBVOLUME_CREATE: &[&str] = &[
    "btrfs subvolume create [options] <dest>/<name> [<dest>/<name>...]",
    "Create subvolume(s)",
    "Create subvolume(s) at the given <dest>/<name> paths.",
    "",
    optline!("-i <qgroupid>", "add the newly created subvolume to a qgroup. This option can be given multiple times."),
    optline!("-p|--parents", "create any missing parent directories for each argument (like mkdir -p)"),
];

const SUBVOLUME_DELETE: &[&str] = &[
    "btrfs subvolume delete [options] <subvolume> [<subvolume>...]\nbtrfs subvolume delete [options] -i|--subvolid <subvolid> <path>",
    "Delete subvolume(s)",
    "Delete subvolumes from the filesystem, specified by a path or id. The",
    "corresponding directory is removed instantly but the data blocks are",
    "removed later.",
    "",
    optline!("-c|--commit-after", "wait for transaction commit at the end of the operation"),
    optline!("-C|--commit-each", "wait for transaction commit after deleting each subvolume"),
    optline!("-i|--subvolid <subvolid>", "subvolume id of the to be removed subvolume"),
    optline!("-R|--recursive", "delete accessible subvolumes beneath each subvolume recursively"),
    optline!("-v|--verbose", "deprecated, alias for global -v option"),
];

const SUBVOLUME_LIST: &[&str] = &[
    "btrfs subvolume list [options] [-G [+|-]value] [-C [+|-]value] [--sort=gen,ogen,rootid,path] <path>",
    "List subvolumes and snapshots in the filesystem.",
    "",
    "Path filtering:",
    optline!("-o", "print only subvolumes below specified path"),
    optline!("-a", "print all the subvolumes in the filesystem"),
    "",
    "Field selection:",
    optline!("-p", "print parent ID"),
    optline!("-u", "print the uuid of subvolumes (and snapshots)"),
    optline!("-q", "print the parent uuid of the snapshots"),
    INSERT_FORMAT,
];

const SUBVOLUME_SNAPSHOT: &[&str] = &[
    "btrfs subvolume snapshot [-r] [-i <qgroupid>] <subvolume> { <subdir>/<name> | <subdir> }",
    "Create a snapshot of a subvolume",
    "Create a writable/readonly snapshot of the subvolume <subvolume> with",
    "the name <name> in the <subdir> directory.  If only <subdir> is given,",
    "the subvolume will be named the basename of <subvolume>.",
    "",
    optline!("-r", "create a readonly snapshot"),
    optline!("-i <qgroupid>", "add the newly created snapshot to a qgroup. This option can be given multiple times."),
];

const SUBVOLUME_SHOW: &[&str] = &[
    "btrfs subvolume show [options] <path>",
    "Show more information about the subvolume (UUIDs, generations, times, snapshots)",
    "",
    optline!("-r|--rootid <ID>", "root id of the subvolume"),
    optline!("-u|--uuid <UUID>", "UUID of the subvolume"),
    INSERT_FORMAT,
];

const SUBVOLUME_SYNC: &[&str] = &[
    "btrfs subvolume sync <path> [<subvolid>...]",
    "Wait until given subvolume(s) are completely removed from the filesystem.",
    "Wait until given subvolume(s) are completely removed from the filesystem",
    "after deletion.",
    "",
    optline!("-s <N>", "sleep N seconds between checks (default: 1)"),
];

const FILESYSTEM_DF: &[&str] = &[
    "btrfs filesystem df [options] <path>",
    "Show space usage information for a mount point",
    "",
    optline!("-b|--raw", "show raw numbers in bytes"),
    optline!("-h|--human-readable", "show human friendly numbers, base 1024 (default)"),
    optline!("-H", "show human friendly numbers, base 1000"),
    optline!("--iec", "use 1024 as a base (KiB, MiB, GiB, TiB)"),
    optline!("--si", "use 1000 as a base (kB, MB, GB, TB)"),
    INSERT_FORMAT,
];

const FILESYSTEM_SHOW: &[&str] = &[
    "btrfs filesystem show [options] [<path>|<uuid>|<device>|<label>]",
    "Show the structure of a filesystem",
    "",
    optline!("-d|--all-devices", "show only disks under /dev containing btrfs filesystem"),
    optline!("-m|--mounted", "show only mounted btrfs"),
    "",
    "If no argument is given, structure of all present filesystems is shown.",
];

const FILESYSTEM_SYNC: &[&str] = &[
    "btrfs filesystem sync <path>",
    "Force a sync on a filesystem",
];

const FILESYSTEM_RESIZE: &[&str] = &[
    "btrfs filesystem resize [options] [devid:][+/-]<newsize>[kKmMgGtTpPeE]|[devid:]max <path>",
    "Resize a filesystem",
    "If 'max' is passed, the filesystem will occupy all available space",
    "on the device 'devid'.",
    "[kK] means KiB, which denotes 1KiB = 1024B, 1MiB = 1024KiB, etc.",
    "",
    optline!("--enqueue", "wait if there's another exclusive operation running, otherwise continue"),
];

const FILESYSTEM_LABEL: &[&str] = &[
    "btrfs filesystem label [<device>|<mount_point>] [<newlabel>]",
    "Get or change the label of a filesystem",
    "With one argument, get the label of filesystem on <device>.",
    "If <newlabel> is passed, set the filesystem label to <newlabel>.",
];

const DEVICE_ADD: &[&str] = &[
    "btrfs device add [options] <device> [<device>...] <path>",
    "Add one or more devices to a mounted filesystem.",
    "",
    optline!("-K|--nodiscard", "do not perform whole device TRIM on devices that report such capability"),
    optline!("-f|--force", "force overwrite existing filesystem on the disk"),
    optline!("--enqueue", "wait if there's another exclusive operation running, otherwise continue"),
];

const DEVICE_REMOVE: &[&str] = &[
    "btrfs device remove <device>|<devid> [<device>|<devid>...] <path>",
    "Remove a device from a filesystem",
    "",
    optline!("--enqueue", "wait if there's another exclusive operation running, otherwise continue"),
];

const DEVICE_DELETE: &[&str] = &["btrfs device delete <device>|<devid> [<device>|<devid>...] <path>"];

const DEVICE_SCAN: &[&str] = &[
    "btrfs device scan [-d|--all-devices] <device> [<device>...]\nbtrfs device scan -u|--forget [<device>...]",
    "Scan or forget (unregister) devices of btrfs filesystems",
    " If no devices or -d is given, scan all devices.",
    "",
    optline!("-d|--all-devices", "enumerate and register all devices, use as a fallback in case blkid is not available"),
    optline!("-u|--forget", "unregister a given device or all stale devices if no path is given"),
];

const DEVICE_STATS: &[&str] = &[
    "btrfs device stats [options] <path>|<device>",
    "Show device IO error statistics",
    "Show device IO error statistics for all devices of the given filesystem",
    "identified by PATH or DEVICE, or a single DEVICE.",
    "",
    optline!("-c|--check", "return non-zero if any stat counter is not zero"),
    optline!("-z|--reset", "show current stats and reset values to zero"),
    optline!("-T", "show current stats in tabular format"),
    INSERT_FORMAT,
];

const VERSION: &[&str] = &["btrfs version", "Display btrfs-progs version"];

const HELP: &[&str] = &[
    "btrfs help [--full] [--box]",
    "Display help information",
    "",
    optline!("--full", "display detailed help on every command"),
    optline!("--box", "show list of built-in tools (busybox style)"),
];

const DEBUG_TREE: &[&str] = &[
    "btrfs-debug-tree [options] <device>",
    "Dump tree structures from a given device (deprecated)",
];

fn leaf(token: &str, lines: &[&str]) -> Result<CommandNode, UsageError> {
    CommandNode::from_lines(token, lines)
}

fn json_capable(token: &str, lines: &[&str]) -> Result<CommandNode, UsageError> {
    Ok(leaf(token, lines)?.with_flags(CommandFlags::FORMAT_TEXT | CommandFlags::FORMAT_JSON))
}

fn subvolume_group() -> Result<CommandGroup, UsageError> {
    Ok(CommandGroup::new()
        .with_usage("btrfs subvolume <command> <args>")
        .with_info("manage subvolumes: create, delete, list, etc")
        .with_command(leaf("create", SUBVOLUME_CREATE)?)
        .with_command(leaf("delete", SUBVOLUME_DELETE)?)
        .with_command(json_capable("list", SUBVOLUME_LIST)?)
        .with_command(leaf("snapshot", SUBVOLUME_SNAPSHOT)?)
        .with_command(json_capable("show", SUBVOLUME_SHOW)?)
        .with_command(leaf("sync", SUBVOLUME_SYNC)?))
}

fn filesystem_group() -> Result<CommandGroup, UsageError> {
    Ok(CommandGroup::new()
        .with_usage("btrfs filesystem [<group>] <command> [<args>]")
        .with_info("overall filesystem tasks and information")
        .with_command(json_capable("df", FILESYSTEM_DF)?)
        .with_command(leaf("show", FILESYSTEM_SHOW)?)
        .with_command(leaf("sync", FILESYSTEM_SYNC)?)
        .with_command(leaf("resize", FILESYSTEM_RESIZE)?)
        .with_command(leaf("label", FILESYSTEM_LABEL)?))
}

fn device_group() -> Result<CommandGroup, UsageError> {
    Ok(CommandGroup::new()
        .with_usage("btrfs device <command> [<args>]")
        .with_info("manage and query devices in the filesystem")
        .with_command(leaf("add", DEVICE_ADD)?)
        .with_command(leaf("delete", DEVICE_DELETE)?.with_flags(CommandFlags::ALIAS))
        .with_command(leaf("remove", DEVICE_REMOVE)?)
        .with_command(leaf("scan", DEVICE_SCAN)?)
        .with_command(json_capable("stats", DEVICE_STATS)?))
}

/// Builds the built-in `btrfs` command table.
///
/// # Examples
///
/// ```
/// use cmdhelp_table::builtin_table;
///
/// let table = builtin_table().unwrap();
/// assert_eq!(table.program, "btrfs");
/// assert_eq!(table.root.resolve("fi").unwrap().token, "filesystem");
/// ```
pub fn builtin_table() -> Result<CommandTable, UsageError> {
    let root = CommandGroup::new()
        .with_usage("btrfs [--help] [--version] [--format <format>] [-v|--verbose] [-q|--quiet] <group> [<group>...] <command> [<args>]")
        .with_usage("btrfs help [--full]")
        .with_usage("btrfs version")
        .with_info("Use --help as an argument for information on a specific group or command.")
        .with_command(CommandNode::group("subvolume", subvolume_group()?))
        .with_command(CommandNode::group("filesystem", filesystem_group()?))
        .with_command(CommandNode::group("device", device_group()?))
        .with_command(leaf("debug-tree", DEBUG_TREE)?.with_flags(CommandFlags::HIDDEN))
        .with_command(leaf("help", HELP)?)
        .with_command(leaf("version", VERSION)?);

    let mut table = CommandTable::new("btrfs", root);
    table.description = Some("btrfs-progs command tree".to_string());
    debug!(commands = table.command_count(), "Built built-in command table");
    Ok(table)
}
