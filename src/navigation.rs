//! src/navigation.rs

use crate::domain::Role;
use crate::utils::DASHBOARD_PATH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

const BASE_MENU: [MenuItem; 5] = [
    MenuItem {
        label: "Dashboard",
        path: DASHBOARD_PATH,
    },
    MenuItem {
        label: "Courses",
        path: "/courses",
    },
    MenuItem {
        label: "Attendance",
        path: "/attendance",
    },
    MenuItem {
        label: "Analytics",
        path: "/analytics",
    },
    MenuItem {
        label: "Notifications",
        path: "/notifications",
    },
];

const USER_MANAGEMENT: MenuItem = MenuItem {
    label: "Users",
    path: "/users",
};

/// Sidebar entries for `role`, in display order.
pub fn menu_items(role: Role) -> Vec<MenuItem> {
    let mut items = BASE_MENU.to_vec();
    match role {
        Role::Admin => items.insert(1, USER_MANAGEMENT),
        Role::Teacher | Role::Student => {}
    }
    items
}
