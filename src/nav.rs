//! Sidebar navigation state. Pure presentational bookkeeping: which route is
//! active, whether the rail is expanded, and the fixed admin menu. Rendering
//! is the embedding shell's job.

/// Admin routes addressable from the sidebar.
pub mod routes {
    pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
    pub const ADMIN_ATTENDANCE: &str = "/admin/attendance";
    pub const ADMIN_SUBMISSIONS: &str = "/admin/submissions";
    pub const ADMIN_PAYROLL: &str = "/admin/payroll";
    pub const ADMIN_REPORTS: &str = "/admin/reports";
}

/// Viewport width below which the rail auto-collapses.
const COLLAPSE_BREAKPOINT: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// The fixed admin menu, in display order.
pub const MENU: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        path: routes::ADMIN_DASHBOARD,
    },
    NavItem {
        label: "Attendance",
        path: routes::ADMIN_ATTENDANCE,
    },
    NavItem {
        label: "Submissions",
        path: routes::ADMIN_SUBMISSIONS,
    },
    NavItem {
        label: "Payroll",
        path: routes::ADMIN_PAYROLL,
    },
    NavItem {
        label: "Reports",
        path: routes::ADMIN_REPORTS,
    },
];

#[derive(Debug, Clone)]
pub struct Sidebar {
    open: bool,
    active_path: String,
}

impl Sidebar {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            open: true,
            active_path: initial_path.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active_path(&self) -> &str {
        &self.active_path
    }

    /// Exact-match route highlight.
    pub fn is_active(&self, path: &str) -> bool {
        self.active_path == path
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Record a navigation. On narrow viewports the rail closes behind it.
    pub fn navigate(&mut self, path: &str, viewport_width: u32) -> &str {
        self.active_path = path.to_string();
        if viewport_width < COLLAPSE_BREAKPOINT {
            self.open = false;
        }
        &self.active_path
    }

    /// Resize rule: collapsed below the breakpoint, expanded at or above it.
    pub fn on_resize(&mut self, viewport_width: u32) {
        self.open = viewport_width >= COLLAPSE_BREAKPOINT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_open_with_the_initial_route_active() {
        let sidebar = Sidebar::new(routes::ADMIN_DASHBOARD);
        assert!(sidebar.is_open());
        assert!(sidebar.is_active("/admin/dashboard"));
        assert!(!sidebar.is_active("/admin/payroll"));
    }

    #[test]
    fn active_match_is_exact() {
        let sidebar = Sidebar::new(routes::ADMIN_SUBMISSIONS);
        assert!(!sidebar.is_active("/admin"));
        assert!(!sidebar.is_active("/admin/submissions/"));
    }

    #[test]
    fn toggle_flips_the_rail() {
        let mut sidebar = Sidebar::new(routes::ADMIN_DASHBOARD);
        sidebar.toggle();
        assert!(!sidebar.is_open());
        sidebar.toggle();
        assert!(sidebar.is_open());
    }

    #[test]
    fn navigating_on_a_narrow_viewport_collapses_the_rail() {
        let mut sidebar = Sidebar::new(routes::ADMIN_DASHBOARD);
        sidebar.navigate(routes::ADMIN_PAYROLL, 800);
        assert!(sidebar.is_active("/admin/payroll"));
        assert!(!sidebar.is_open());
    }

    #[test]
    fn navigating_on_a_wide_viewport_keeps_the_rail_open() {
        let mut sidebar = Sidebar::new(routes::ADMIN_DASHBOARD);
        sidebar.navigate(routes::ADMIN_REPORTS, 1440);
        assert!(sidebar.is_active("/admin/reports"));
        assert!(sidebar.is_open());
    }

    #[test]
    fn resize_follows_the_breakpoint() {
        let mut sidebar = Sidebar::new(routes::ADMIN_DASHBOARD);
        sidebar.on_resize(1023);
        assert!(!sidebar.is_open());
        sidebar.on_resize(1024);
        assert!(sidebar.is_open());
    }

    #[test]
    fn menu_lists_the_admin_pages_in_display_order() {
        let paths: Vec<_> = MENU.iter().map(|item| item.path).collect();
        assert_eq!(
            paths,
            vec![
                "/admin/dashboard",
                "/admin/attendance",
                "/admin/submissions",
                "/admin/payroll",
                "/admin/reports",
            ]
        );
    }
}
