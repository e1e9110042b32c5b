/// Fixed icon set, resampling filter and settings locations

pub mod icons {
    /// One output icon: file name inside the output directory and exact pixel size
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IconTarget {
        pub file_name: &'static str,
        pub width: u32,
        pub height: u32,
    }

    /// Icons written on every run, in this order
    pub const ICON_TARGETS: [IconTarget; 4] = [
        IconTarget { file_name: "pwa-192x192.png", width: 192, height: 192 },
        IconTarget { file_name: "pwa-512x512.png", width: 512, height: 512 },
        IconTarget { file_name: "apple-touch-icon.png", width: 180, height: 180 },
        IconTarget { file_name: "favicon.png", width: 64, height: 64 },
    ];
}

pub mod resample {
    use image::imageops::FilterType;

    /// Lanczos with a 3-lobe window, good for both downscaling and upscaling
    pub const FILTER: FilterType = FilterType::Lanczos3;
}

pub mod settings {
    /// Directory under $HOME holding the settings file
    pub const CONFIG_DIR_NAME: &str = ".pwa-icons";

    pub const CONFIG_FILE_NAME: &str = "settings.yaml";
}
