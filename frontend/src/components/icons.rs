//! 图标组件
//!
//! 内联 SVG 线条图标，调用方通过 `attr:class` 控制尺寸与颜色。

use leptos::prelude::*;

macro_rules! icon {
    ($name:ident, $($d:expr),+ $(,)?) => {
        #[component]
        pub fn $name() -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    $(<path d=$d />)+
                </svg>
            }
        }
    };
}

icon!(Menu, "M4 6h16", "M4 12h16", "M4 18h16");

icon!(
    Sun,
    "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10z",
    "M12 1v2m0 18v2M4.2 4.2l1.4 1.4m12.8 12.8 1.4 1.4M1 12h2m18 0h2M4.2 19.8l1.4-1.4M18.4 5.6l1.4-1.4",
);

icon!(Moon, "M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z");

icon!(Send, "m22 2-7 20-4-9-9-4z", "M22 2 11 13");

icon!(
    LogIn,
    "M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4",
    "m10 17 5-5-5-5",
    "M15 12H3",
);

icon!(
    LogOut,
    "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
    "m16 17 5-5-5-5",
    "M21 12H9",
);

icon!(
    Eye,
    "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z",
    "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
);

icon!(
    EyeOff,
    "M9.9 4.2A9.8 9.8 0 0 1 12 4c7 0 10 8 10 8a13.2 13.2 0 0 1-1.7 2.9",
    "M6.6 6.6A13.5 13.5 0 0 0 2 12s3 8 10 8a9.7 9.7 0 0 0 5.4-1.6",
    "m2 2 20 20",
);

icon!(
    Dumbbell,
    "m6.5 6.5 11 11",
    "m21 21-1-1",
    "m3 3 1 1",
    "m18 22 4-4",
    "m2 6 4-4",
    "m3 10 7-7",
    "m14 21 7-7",
);

icon!(
    Apple,
    "M12 6.5c2-2.5 5.5-2.5 7.5 0 2.2 2.8 1.5 7-1.5 10.5-1.8 2.1-4 3-6 3s-4.2-.9-6-3C3 13.5 2.3 9.3 4.5 6.5c2-2.5 5.5-2.5 7.5 0z",
    "M10 2c1 .5 2 2 2 4.5",
);

icon!(Bed, "M2 4v16", "M2 8h18a2 2 0 0 1 2 2v10", "M2 17h20", "M6 8v9");

icon!(
    Trophy,
    "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
    "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
    "M4 22h16",
    "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
    "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
    "M18 2H6v7a6 6 0 0 0 12 0V2Z",
);

icon!(
    Utensils,
    "M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2",
    "M7 2v20",
    "M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3Zm0 0v7",
);

icon!(
    CalendarDays,
    "M8 2v4",
    "M16 2v4",
    "M3 6a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
    "M3 10h18",
);

icon!(
    ClipboardList,
    "M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2",
    "M9 2h6a1 1 0 0 1 1 1v2a1 1 0 0 1-1 1H9a1 1 0 0 1-1-1V3a1 1 0 0 1 1-1z",
    "M12 11h4",
    "M12 16h4",
    "M8 11h.01",
    "M8 16h.01",
);

icon!(ChartLine, "M3 3v16a2 2 0 0 0 2 2h16", "m19 9-5 5-4-4-3 3");

icon!(
    RotateCcw,
    "M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8",
    "M3 3v5h5",
);

icon!(
    Shuffle,
    "M2 18h1.4c1.3 0 2.5-.6 3.3-1.7l6.1-8.6c.8-1.1 2-1.7 3.3-1.7H22",
    "m18 2 4 4-4 4",
    "M2 6h1.9c1.5 0 2.9.9 3.6 2.2",
    "M22 18h-5.9c-1.3 0-2.6-.7-3.3-1.8l-.5-.8",
    "m18 14 4 4-4 4",
);

icon!(
    Trash2,
    "M3 6h18",
    "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
    "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
    "M10 11v6",
    "M14 11v6",
);

icon!(
    Lock,
    "M7 11V7a5 5 0 0 1 10 0v4",
    "M3 11h18v10a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
);
