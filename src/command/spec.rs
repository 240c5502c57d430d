use super::types::{ArgKind, ArgSpec, CommandSpec};

const NO_ARGS: [ArgSpec; 0] = [];
const ARGS_GOTO_ROUTE: [ArgSpec; 1] = [ArgSpec {
    name: "path",
    kind: ArgKind::Route,
    required: true,
}];
const ARGS_TOOLTIP: [ArgSpec; 2] = [
    ArgSpec {
        name: "action",
        kind: ArgKind::Text,
        required: true,
    },
    ArgSpec {
        name: "| message",
        kind: ArgKind::Text,
        required: false,
    },
];
const ARGS_FEATURE: [ArgSpec; 2] = [
    ArgSpec {
        name: "enter|exit",
        kind: ArgKind::Word,
        required: true,
    },
    ArgSpec {
        name: "feature",
        kind: ArgKind::Text,
        required: true,
    },
];
const ARGS_ACTIVITY: [ArgSpec; 2] = [
    ArgSpec {
        name: "enter|exit",
        kind: ArgKind::Word,
        required: true,
    },
    ArgSpec {
        name: "activity",
        kind: ArgKind::Text,
        required: true,
    },
];
const ARGS_SET_NAME: [ArgSpec; 1] = [ArgSpec {
    name: "name",
    kind: ArgKind::Text,
    required: true,
}];
const ARGS_SET_BIO: [ArgSpec; 1] = [ArgSpec {
    name: "bio",
    kind: ArgKind::Text,
    required: false,
}];
const ARGS_OPEN_PALETTE: [ArgSpec; 2] = [
    ArgSpec {
        name: "kind",
        kind: ArgKind::Word,
        required: true,
    },
    ArgSpec {
        name: "seed",
        kind: ArgKind::Text,
        required: false,
    },
];

const COMMAND_SPECS: [CommandSpec; 19] = [
    CommandSpec {
        id: "goto-route",
        title: "Go to Route",
        args: &ARGS_GOTO_ROUTE,
    },
    CommandSpec {
        id: "next-route",
        title: "Next Route",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "prev-route",
        title: "Previous Route",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "tooltip",
        title: "Show Action Tooltip",
        args: &ARGS_TOOLTIP,
    },
    CommandSpec {
        id: "feature",
        title: "Feature Toast",
        args: &ARGS_FEATURE,
    },
    CommandSpec {
        id: "activity",
        title: "Activity Toast",
        args: &ARGS_ACTIVITY,
    },
    CommandSpec {
        id: "dismiss-toasts",
        title: "Dismiss Toasts",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "edit-profile",
        title: "Edit Profile",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "cancel-edit",
        title: "Cancel Profile Edit",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "toggle-edit",
        title: "Toggle Profile Edit",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "set-name",
        title: "Set Display Name",
        args: &ARGS_SET_NAME,
    },
    CommandSpec {
        id: "set-bio",
        title: "Set Bio",
        args: &ARGS_SET_BIO,
    },
    CommandSpec {
        id: "save-profile",
        title: "Save Profile",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "reload-profile",
        title: "Reload Profile",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "change-avatar",
        title: "Change Avatar",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "open-palette",
        title: "Open Palette",
        args: &ARGS_OPEN_PALETTE,
    },
    CommandSpec {
        id: "close-palette",
        title: "Close Palette",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "cancel",
        title: "Cancel",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "quit",
        title: "Quit",
        args: &NO_ARGS,
    },
];

pub fn command_registry() -> &'static [CommandSpec] {
    &COMMAND_SPECS
}

pub fn all_command_specs() -> Vec<CommandSpec> {
    COMMAND_SPECS.to_vec()
}
