//! Message categories assigned to global message numbers.

use core::fmt;

/// The top-level category of a message.
///
/// Categories are assigned to global message numbers by the protocol
/// profile. This table carries the assignment only; field-level profile
/// semantics are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    FileId,
    Capabilities,
    DeviceSettings,
    UserProfile,
    HrmProfile,
    SdmProfile,
    BikeProfile,
    ZonesTarget,
    HrZone,
    PowerZone,
    MetZone,
    Sport,
    Goal,
    Session,
    Lap,
    Record,
    Event,
    DeviceInfo,
    Workout,
    WorkoutStep,
    Schedule,
    WeightScale,
    Course,
    CoursePoint,
    Totals,
    Activity,
    Software,
    FileCapabilities,
    MesgCapabilities,
    FieldCapabilities,
    FileCreator,
    BloodPressure,
    SpeedZone,
    Monitoring,
    TrainingFile,
    Hrv,
    AntRx,
    AntTx,
    AntChannelId,
    Length,
    MonitoringInfo,
    Pad,
    SlaveDevice,
    Connectivity,
    WeatherConditions,
    WeatherAlert,
    CadenceZone,
    Hr,
    SegmentLap,
    MemoGlob,
    SegmentId,
    SegmentLeaderboardEntry,
    SegmentPoint,
    SegmentFile,
    WorkoutSession,
    WatchfaceSettings,
    GpsMetadata,
    CameraEvent,
    TimestampCorrelation,
    GyroscopeData,
    AccelerometerData,
    ThreeDSensorCalibration,
    VideoFrame,
    ObdiiData,
    NmeaSentence,
    AviationAttitude,
    Video,
    VideoTitle,
    VideoDescription,
    VideoClip,
    OhrSettings,
    ExdScreenConfiguration,
    ExdDataFieldConfiguration,
    ExdDataConceptConfiguration,
    FieldDescription,
    DeveloperDataId,
    MagnetometerData,
    BarometerData,
    OneDSensorCalibration,
    Set,
    StressLevel,
    DiveSettings,
    DiveGas,
    DiveAlarm,
    ExerciseTitle,
    DiveSummary,
    Jump,
    ClimbPro,
    /// A number without an assigned category.
    Unknown,
}

impl MessageCategory {
    /// Look up the category assigned to a global message number.
    pub fn from_number(number: u16) -> Self {
        match number {
            0 => Self::FileId,
            1 => Self::Capabilities,
            2 => Self::DeviceSettings,
            3 => Self::UserProfile,
            4 => Self::HrmProfile,
            5 => Self::SdmProfile,
            6 => Self::BikeProfile,
            7 => Self::ZonesTarget,
            8 => Self::HrZone,
            9 => Self::PowerZone,
            10 => Self::MetZone,
            12 => Self::Sport,
            15 => Self::Goal,
            18 => Self::Session,
            19 => Self::Lap,
            20 => Self::Record,
            21 => Self::Event,
            23 => Self::DeviceInfo,
            26 => Self::Workout,
            27 => Self::WorkoutStep,
            28 => Self::Schedule,
            30 => Self::WeightScale,
            31 => Self::Course,
            32 => Self::CoursePoint,
            33 => Self::Totals,
            34 => Self::Activity,
            35 => Self::Software,
            37 => Self::FileCapabilities,
            38 => Self::MesgCapabilities,
            39 => Self::FieldCapabilities,
            49 => Self::FileCreator,
            51 => Self::BloodPressure,
            53 => Self::SpeedZone,
            55 => Self::Monitoring,
            72 => Self::TrainingFile,
            78 => Self::Hrv,
            80 => Self::AntRx,
            81 => Self::AntTx,
            82 => Self::AntChannelId,
            101 => Self::Length,
            103 => Self::MonitoringInfo,
            105 => Self::Pad,
            106 => Self::SlaveDevice,
            127 => Self::Connectivity,
            128 => Self::WeatherConditions,
            129 => Self::WeatherAlert,
            131 => Self::CadenceZone,
            132 => Self::Hr,
            142 => Self::SegmentLap,
            145 => Self::MemoGlob,
            148 => Self::SegmentId,
            149 => Self::SegmentLeaderboardEntry,
            150 => Self::SegmentPoint,
            151 => Self::SegmentFile,
            158 => Self::WorkoutSession,
            159 => Self::WatchfaceSettings,
            160 => Self::GpsMetadata,
            161 => Self::CameraEvent,
            162 => Self::TimestampCorrelation,
            164 => Self::GyroscopeData,
            165 => Self::AccelerometerData,
            167 => Self::ThreeDSensorCalibration,
            169 => Self::VideoFrame,
            174 => Self::ObdiiData,
            177 => Self::NmeaSentence,
            178 => Self::AviationAttitude,
            184 => Self::Video,
            185 => Self::VideoTitle,
            186 => Self::VideoDescription,
            187 => Self::VideoClip,
            188 => Self::OhrSettings,
            200 => Self::ExdScreenConfiguration,
            201 => Self::ExdDataFieldConfiguration,
            202 => Self::ExdDataConceptConfiguration,
            206 => Self::FieldDescription,
            207 => Self::DeveloperDataId,
            208 => Self::MagnetometerData,
            209 => Self::BarometerData,
            210 => Self::OneDSensorCalibration,
            225 => Self::Set,
            227 => Self::StressLevel,
            258 => Self::DiveSettings,
            259 => Self::DiveGas,
            262 => Self::DiveAlarm,
            264 => Self::ExerciseTitle,
            268 => Self::DiveSummary,
            285 => Self::Jump,
            317 => Self::ClimbPro,
            _ => Self::Unknown,
        }
    }

    /// The category's profile name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileId => "FILE_ID",
            Self::Capabilities => "CAPABILITIES",
            Self::DeviceSettings => "DEVICE_SETTINGS",
            Self::UserProfile => "USER_PROFILE",
            Self::HrmProfile => "HRM_PROFILE",
            Self::SdmProfile => "SDM_PROFILE",
            Self::BikeProfile => "BIKE_PROFILE",
            Self::ZonesTarget => "ZONES_TARGET",
            Self::HrZone => "HR_ZONE",
            Self::PowerZone => "POWER_ZONE",
            Self::MetZone => "MET_ZONE",
            Self::Sport => "SPORT",
            Self::Goal => "GOAL",
            Self::Session => "SESSION",
            Self::Lap => "LAP",
            Self::Record => "RECORD",
            Self::Event => "EVENT",
            Self::DeviceInfo => "DEVICE_INFO",
            Self::Workout => "WORKOUT",
            Self::WorkoutStep => "WORKOUT_STEP",
            Self::Schedule => "SCHEDULE",
            Self::WeightScale => "WEIGHT_SCALE",
            Self::Course => "COURSE",
            Self::CoursePoint => "COURSE_POINT",
            Self::Totals => "TOTALS",
            Self::Activity => "ACTIVITY",
            Self::Software => "SOFTWARE",
            Self::FileCapabilities => "FILE_CAPABILITIES",
            Self::MesgCapabilities => "MESG_CAPABILITIES",
            Self::FieldCapabilities => "FIELD_CAPABILITIES",
            Self::FileCreator => "FILE_CREATOR",
            Self::BloodPressure => "BLOOD_PRESSURE",
            Self::SpeedZone => "SPEED_ZONE",
            Self::Monitoring => "MONITORING",
            Self::TrainingFile => "TRAINING_FILE",
            Self::Hrv => "HRV",
            Self::AntRx => "ANT_RX",
            Self::AntTx => "ANT_TX",
            Self::AntChannelId => "ANT_CHANNEL_ID",
            Self::Length => "LENGTH",
            Self::MonitoringInfo => "MONITORING_INFO",
            Self::Pad => "PAD",
            Self::SlaveDevice => "SLAVE_DEVICE",
            Self::Connectivity => "CONNECTIVITY",
            Self::WeatherConditions => "WEATHER_CONDITIONS",
            Self::WeatherAlert => "WEATHER_ALERT",
            Self::CadenceZone => "CADENCE_ZONE",
            Self::Hr => "HR",
            Self::SegmentLap => "SEGMENT_LAP",
            Self::MemoGlob => "MEMO_GLOB",
            Self::SegmentId => "SEGMENT_ID",
            Self::SegmentLeaderboardEntry => "SEGMENT_LEADERBOARD_ENTRY",
            Self::SegmentPoint => "SEGMENT_POINT",
            Self::SegmentFile => "SEGMENT_FILE",
            Self::WorkoutSession => "WORKOUT_SESSION",
            Self::WatchfaceSettings => "WATCHFACE_SETTINGS",
            Self::GpsMetadata => "GPS_METADATA",
            Self::CameraEvent => "CAMERA_EVENT",
            Self::TimestampCorrelation => "TIMESTAMP_CORRELATION",
            Self::GyroscopeData => "GYROSCOPE_DATA",
            Self::AccelerometerData => "ACCELEROMETER_DATA",
            Self::ThreeDSensorCalibration => "3D_SENSOR_CALIBRATION",
            Self::VideoFrame => "VIDEO_FRAME",
            Self::ObdiiData => "OBDII_DATA",
            Self::NmeaSentence => "NMEA_SENTENCE",
            Self::AviationAttitude => "AVIATION_ATTITUDE",
            Self::Video => "VIDEO",
            Self::VideoTitle => "VIDEO_TITLE",
            Self::VideoDescription => "VIDEO_DESCRIPTION",
            Self::VideoClip => "VIDEO_CLIP",
            Self::OhrSettings => "OHR_SETTINGS",
            Self::ExdScreenConfiguration => "EXD_SCREEN_CONFIGURATION",
            Self::ExdDataFieldConfiguration => "EXD_DATA_FIELD_CONFIGURATION",
            Self::ExdDataConceptConfiguration => "EXD_DATA_CONCEPT_CONFIGURATION",
            Self::FieldDescription => "FIELD_DESCRIPTION",
            Self::DeveloperDataId => "DEVELOPER_DATA_ID",
            Self::MagnetometerData => "MAGNETOMETER_DATA",
            Self::BarometerData => "BAROMETER_DATA",
            Self::OneDSensorCalibration => "1D_SENSOR_CALIBRATION",
            Self::Set => "SET",
            Self::StressLevel => "STRESS_LEVEL",
            Self::DiveSettings => "DIVE_SETTINGS",
            Self::DiveGas => "DIVE_GAS",
            Self::DiveAlarm => "DIVE_ALARM",
            Self::ExerciseTitle => "EXERCISE_TITLE",
            Self::DiveSummary => "DIVE_SUMMARY",
            Self::Jump => "JUMP",
            Self::ClimbPro => "CLIMB_PRO",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
