//! Static resource registry. It drives the sider navigation and is the
//! single source of truth for resource routes and delete permissions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDef {
    pub name: &'static str,
    pub label: &'static str,
    /// Font Awesome icon class rendered in the sider.
    pub icon: &'static str,
    pub list: &'static str,
    pub create: Option<&'static str>,
    pub edit: Option<&'static str>,
    pub show: Option<&'static str>,
    pub can_delete: bool,
}

pub const RESOURCES: &[ResourceDef] = &[
    ResourceDef {
        name: "dashboard",
        label: "Dashboard",
        icon: "fa-gauge",
        list: "/",
        create: None,
        edit: None,
        show: None,
        can_delete: false,
    },
    ResourceDef {
        name: "properties",
        label: "Properties",
        icon: "fa-building",
        list: "/properties",
        create: Some("/properties/create"),
        edit: Some("/properties/edit/:id"),
        show: Some("/properties/show/:id"),
        can_delete: true,
    },
    ResourceDef {
        name: "agents",
        label: "Agents",
        icon: "fa-user-group",
        list: "/agents",
        create: None,
        edit: None,
        show: Some("/agents/show/:id"),
        can_delete: false,
    },
    ResourceDef {
        name: "reviews",
        label: "Reviews",
        icon: "fa-star",
        list: "/reviews",
        create: None,
        edit: None,
        show: None,
        can_delete: false,
    },
    ResourceDef {
        name: "messages",
        label: "Messages",
        icon: "fa-envelope",
        list: "/messages",
        create: None,
        edit: None,
        show: None,
        can_delete: false,
    },
    ResourceDef {
        name: "my-profile",
        label: "My Profile",
        icon: "fa-id-card",
        list: "/my-profile",
        create: None,
        edit: None,
        show: None,
        can_delete: false,
    },
];

pub fn resource_by_name(name: &str) -> Option<&'static ResourceDef> {
    RESOURCES.iter().find(|resource| resource.name == name)
}

/// Where an authenticated visitor lands by default.
pub fn default_resource() -> &'static ResourceDef {
    &RESOURCES[0]
}
